use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use parking_lot::Mutex;
use zmotion_engine::{
    device::MotionEvent,
    eframe::{self, egui},
    event::Event,
    source::{Source, SourceStatus},
    Engine,
};

use super::{sleep_unless_stopped, Runner};

const DEFAULT_PATH: &'static str = "demos/motion.jsonl";

/// Plays back a recording with one JSON encoded motion event per line.
pub struct Replay {
    runner: Runner,
    settings: Mutex<Settings>,
}

#[derive(Clone)]
struct Settings {
    path: String,
    interval_ms: u64,
    looping: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            path: DEFAULT_PATH.to_owned(),
            interval_ms: 16,
            looping: true,
        }
    }
}

impl Replay {
    pub fn new() -> Self {
        Replay {
            runner: Runner::new(),
            settings: Mutex::new(Settings::default()),
        }
    }
}

impl Source for Replay {
    fn init(&self, engine: Arc<Engine>) {
        let settings = self.settings.lock().clone();
        self.runner
            .start("replay", engine, move |engine, stop| replay(settings, engine, stop));
    }

    fn stop(&self) {
        self.runner.stop()
    }

    fn status(&self) -> SourceStatus {
        self.runner.status()
    }

    fn name(&self) -> &str {
        "replay"
    }

    fn update_gui(&self, _ctx: &egui::Context, _frame: &mut eframe::Frame, ui: &mut egui::Ui) {
        let mut settings = self.settings.lock();
        ui.horizontal(|ui| {
            ui.label("Recording:");
            ui.text_edit_singleline(&mut settings.path);
        });
        ui.add(egui::Slider::new(&mut settings.interval_ms, 1..=1000).text("interval (ms)"));
        ui.checkbox(&mut settings.looping, "Loop");
    }
}

fn replay(settings: Settings, engine: Arc<Engine>, stop: &AtomicBool) -> Result<()> {
    let src = std::fs::read_to_string(&settings.path)
        .with_context(|| format!("failed to read recording {}", settings.path))?;
    let events = parse_recording(&src)?;
    if events.is_empty() {
        bail!("recording {} has no events", settings.path);
    }

    let interval = Duration::from_millis(settings.interval_ms);

    loop {
        for event in &events {
            if !sleep_unless_stopped(stop, interval) {
                return Ok(());
            }

            engine
                .post(Event::MotionUpdate(event.clone()))
                .context("failed to post motion update")?;
        }

        if !settings.looping {
            return Ok(());
        }
    }
}

/// Blank lines are skipped, anything else has to be a motion event.
fn parse_recording(src: &str) -> Result<Vec<MotionEvent>> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<MotionEvent>(line)
                .with_context(|| format!("invalid event on line {}", index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use zmotion_engine::device::{Acceleration, RotationRate};

    use super::parse_recording;

    #[test]
    fn parses_one_event_per_line() {
        let src = r#"
{"acceleration":{"x":1,"y":2,"z":3},"acceleration_including_gravity":{"x":2,"y":3,"z":4},"rotation_rate":{"alpha":1,"beta":2,"gamma":3}}

{"acceleration":{"x":0,"y":0,"z":0},"acceleration_including_gravity":{"x":0,"y":0,"z":9.81}}
"#;

        let events = parse_recording(src).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].acceleration, Acceleration::new(1.0, 2.0, 3.0));
        assert_eq!(events[0].rotation_rate, Some(RotationRate::new(1.0, 2.0, 3.0)));
        assert_eq!(events[1].acceleration_including_gravity, Acceleration::new(0.0, 0.0, 9.81));
        assert_eq!(events[1].rotation_rate, None);
    }

    #[test]
    fn reports_the_bad_line() {
        let src = "\n{\"acceleration\":{\"x\":1,\"y\":2,\"z\":3}}\n";

        let err = parse_recording(src).unwrap_err();
        assert_eq!(err.to_string(), "invalid event on line 2");
    }

    #[test]
    fn empty_recording_parses_to_nothing() {
        assert!(parse_recording("\n  \n").unwrap().is_empty());
    }
}
