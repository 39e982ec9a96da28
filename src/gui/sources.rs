use std::sync::Arc;

use zmotion_engine::{
    eframe::{self, egui},
    source::{Source, SourceStatus},
    Engine,
};

/// The "Sources" window: one block per sensor source with its state, a
/// start/stop toggle and its settings folded away underneath.
pub struct SourceList {
    engine: Arc<Engine>,
    pub(super) sources: Vec<Arc<dyn Source + Send + Sync>>,
}

impl SourceList {
    pub fn new(engine: Arc<Engine>, sources: Vec<Arc<dyn Source + Send + Sync>>) -> Self {
        SourceList { engine, sources }
    }

    pub fn update(&self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::Window::new("Sources").show(ctx, |ui| {
            for (i, source) in self.sources.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }

                self.show_source(ctx, frame, ui, source.as_ref());
            }
        });
    }

    pub fn stop_all(&self) {
        for source in &self.sources {
            source.stop();
        }
    }

    fn show_source(
        &self,
        ctx: &egui::Context,
        frame: &mut eframe::Frame,
        ui: &mut egui::Ui,
        source: &(dyn Source + Send + Sync),
    ) {
        let status = source.status();

        ui.horizontal(|ui| {
            ui.strong(source.name());
            ui.colored_label(status_color(&status), status_word(&status));

            if ui.button(toggle_label(&status)).clicked() {
                match &status {
                    SourceStatus::Running => source.stop(),
                    _ => source.init(self.engine.clone()),
                }
            }
        });

        if let SourceStatus::Error(err) = &status {
            ui.colored_label(egui::Color32::RED, err);
        }

        egui::CollapsingHeader::new("Settings")
            .id_source(("source settings", source.name()))
            .show(ui, |ui| source.update_gui(ctx, frame, ui));
    }
}

fn status_color(status: &SourceStatus) -> egui::Color32 {
    match status {
        SourceStatus::Running => egui::Color32::GREEN,
        SourceStatus::Stopped => egui::Color32::GRAY,
        SourceStatus::Error(_) => egui::Color32::RED,
    }
}

fn status_word(status: &SourceStatus) -> &'static str {
    match status {
        SourceStatus::Running => "running",
        SourceStatus::Stopped => "stopped",
        SourceStatus::Error(_) => "crashed",
    }
}

/// A crashed source can be restarted like a stopped one.
fn toggle_label(status: &SourceStatus) -> &'static str {
    match status {
        SourceStatus::Running => "Stop",
        SourceStatus::Stopped => "Start",
        SourceStatus::Error(_) => "Restart",
    }
}

#[cfg(test)]
mod tests {
    use zmotion_engine::{eframe::egui, source::SourceStatus};

    use super::{status_color, status_word, toggle_label};

    #[test]
    fn crashed_source_offers_restart() {
        let status = SourceStatus::Error("crashed: no sensor".to_owned());
        assert_eq!(status_word(&status), "crashed");
        assert_eq!(toggle_label(&status), "Restart");
        assert_eq!(status_color(&status), egui::Color32::RED);
    }

    #[test]
    fn toggle_follows_status() {
        assert_eq!(toggle_label(&SourceStatus::Running), "Stop");
        assert_eq!(toggle_label(&SourceStatus::Stopped), "Start");
    }
}
