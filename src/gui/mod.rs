use std::sync::Arc;

use zmotion_engine::{
    adapter::MotionSensorAdapter,
    eframe::{self, egui},
    event::Event,
    orientation::{ScreenOrientation, SharedOrientation},
    source::Source,
    Engine,
};

use crate::util::thread::ThreadHandle;

use self::scene::Scene;

pub mod scene;
mod sources;

#[cfg(test)]
mod tests;

const T: &'static str = "gui";

const ANGLES: [i32; 4] = [0, 90, -90, 180];

pub struct Gui {
    engine: Arc<Engine>,
    orientation: Arc<SharedOrientation>,
    adapter: MotionSensorAdapter<Scene>,
    sources: sources::SourceList,

    event_thread: Option<ThreadHandle<()>>,
    first_update: bool,
}

impl Gui {
    pub fn new(
        engine: Arc<Engine>,
        orientation: Arc<SharedOrientation>,
        adapter: MotionSensorAdapter<Scene>,
        sources: Vec<Arc<dyn Source + Send + Sync>>,
        event_thread: ThreadHandle<()>,
    ) -> Self {
        Gui {
            sources: sources::SourceList::new(engine.clone(), sources),
            engine,
            orientation,
            adapter,

            event_thread: Some(event_thread),
            first_update: true,
        }
    }

    /// Stops every source, unsubscribes the adapter and joins the event thread.
    fn shutdown(&mut self) {
        self.sources.stop_all();
        self.adapter.deactivate();

        if let Some(handle) = self.event_thread.take() {
            if handle.stop().is_err() {
                log::error!(target: T, "event thread panicked");
            }
        }
    }

    fn show_orientation_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("orientation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Screen rotation:");

                let current = self.orientation.angle();
                for angle in ANGLES {
                    if ui
                        .selectable_label(current == Some(angle), format!("{}°", angle))
                        .clicked()
                        && current != Some(angle)
                    {
                        self.orientation.set(Some(angle));
                        if let Err(err) = self.engine.post(Event::OrientationChange) {
                            log::error!(target: T, "failed to post orientation change: {}", err);
                        }
                    }
                }

                ui.separator();
                ui.label(format!("Adapter sees {}", self.adapter.orientation()));
            });
        });
    }

    fn show_scene(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let config = self.adapter.config();
            ui.label(format!(
                "Multiplier {}, gravity {}",
                config.multiplier,
                if config.use_gravity { "included" } else { "excluded" }
            ));
            ui.separator();

            match self.adapter.output() {
                None | Some(Scene::NoData) => {
                    ui.label("No motion data");
                }
                Some(Scene::Motion { offset, lines }) => {
                    for line in &lines {
                        ui.monospace(line);
                    }

                    let rect = ui.available_rect_before_wrap();
                    let center = rect.center();
                    let painter = ui.painter_at(rect);
                    let stroke = egui::Stroke::new(1.0, egui::Color32::DARK_GRAY);
                    painter.line_segment(
                        [egui::pos2(rect.left(), center.y), egui::pos2(rect.right(), center.y)],
                        stroke,
                    );
                    painter.line_segment(
                        [egui::pos2(center.x, rect.top()), egui::pos2(center.x, rect.bottom())],
                        stroke,
                    );
                    painter.circle_filled(center + offset, 12.0, egui::Color32::LIGHT_BLUE);
                }
            }
        });
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.first_update {
            self.first_update = false;
            ctx.set_visuals(egui::Visuals::dark());
        }

        self.show_orientation_bar(ctx);
        self.sources.update(ctx, frame);
        self.show_scene(ctx);

        ctx.request_repaint();
    }

    fn on_exit_event(&mut self) -> bool {
        self.shutdown();
        true
    }
}
