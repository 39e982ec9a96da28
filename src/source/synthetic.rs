use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Duration,
};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use zmotion_engine::{
    device::{Acceleration, MotionEvent, RotationRate},
    eframe::{self, egui},
    event::Event,
    source::{Source, SourceStatus},
    Engine,
};

use super::{sleep_unless_stopped, Runner};

const STANDARD_GRAVITY: f64 = 9.81;

// Radians per second of the slow circular tilt
const WOBBLE_SPEED: f64 = 0.5;

/// A device lying almost flat that is being tilted in a slow circle.
pub struct Synthetic {
    runner: Runner,
    settings: Mutex<Settings>,
}

#[derive(Clone)]
struct Settings {
    rate_hz: u32,
    /// Horizontal part of gravity at the steepest point, m/s^2
    tilt: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rate_hz: 60,
            tilt: 3.0,
        }
    }
}

impl Synthetic {
    pub fn new() -> Self {
        Synthetic {
            runner: Runner::new(),
            settings: Mutex::new(Settings::default()),
        }
    }
}

impl Source for Synthetic {
    fn init(&self, engine: Arc<Engine>) {
        let settings = self.settings.lock().clone();
        self.runner
            .start("synthetic", engine, move |engine, stop| synthetic(settings, engine, stop));
    }

    fn stop(&self) {
        self.runner.stop()
    }

    fn status(&self) -> SourceStatus {
        self.runner.status()
    }

    fn name(&self) -> &str {
        "synthetic"
    }

    fn update_gui(&self, _ctx: &egui::Context, _frame: &mut eframe::Frame, ui: &mut egui::Ui) {
        let mut settings = self.settings.lock();
        ui.add(egui::Slider::new(&mut settings.rate_hz, 1..=120).text("rate (Hz)"));
        ui.add(egui::Slider::new(&mut settings.tilt, 0.0..=STANDARD_GRAVITY).text("tilt (m/s²)"));
        ui.label("Changes apply on the next start.");
    }
}

fn synthetic(settings: Settings, engine: Arc<Engine>, stop: &AtomicBool) -> Result<()> {
    let period = Duration::from_secs_f64(1.0 / settings.rate_hz.max(1) as f64);
    let mut time = 0.0;

    while sleep_unless_stopped(stop, period) {
        time += period.as_secs_f64();

        engine
            .post(Event::MotionUpdate(sample(time, settings.tilt)))
            .context("failed to post motion update")?;
    }

    Ok(())
}

/// The motion event `time` seconds into the wobble.
fn sample(time: f64, tilt: f64) -> MotionEvent {
    let tilt = tilt.clamp(0.0, STANDARD_GRAVITY);
    let phase = time * WOBBLE_SPEED;

    let gravity = Acceleration::new(
        tilt * phase.cos(),
        tilt * phase.sin(),
        (STANDARD_GRAVITY * STANDARD_GRAVITY - tilt * tilt).sqrt(),
    );

    // centripetal acceleration of the hand moving the device around
    let radius = 0.05;
    let hand = Acceleration::new(
        -radius * WOBBLE_SPEED * WOBBLE_SPEED * phase.cos(),
        -radius * WOBBLE_SPEED * WOBBLE_SPEED * phase.sin(),
        0.0,
    );

    let including_gravity = Acceleration::new(
        gravity.x + hand.x,
        gravity.y + hand.y,
        gravity.z + hand.z,
    );

    let rotation = RotationRate::new(WOBBLE_SPEED.to_degrees(), 0.0, 0.0);

    MotionEvent::new(hand, including_gravity, Some(rotation))
}

#[cfg(test)]
mod tests {
    use super::{sample, STANDARD_GRAVITY};

    #[test]
    fn starts_tilted_along_x() {
        let event = sample(0.0, 3.0);
        let gravity = event.acceleration_including_gravity;

        assert!(gravity.x > 2.9);
        assert!(gravity.y.abs() < 1e-9);
        assert!(gravity.z > 9.0);
    }

    #[test]
    fn gravity_magnitude_stays_close_to_one_g() {
        for step in 0..100 {
            let event = sample(step as f64 * 0.37, 4.0);
            let a = event.acceleration_including_gravity;
            let magnitude = (a.x * a.x + a.y * a.y + a.z * a.z).sqrt();
            assert!((magnitude - STANDARD_GRAVITY).abs() < 0.05, "magnitude {magnitude}");
        }
    }

    #[test]
    fn always_reports_rotation() {
        let rotation = sample(12.0, 1.0).rotation_rate.unwrap();
        assert!(rotation.alpha > 28.0 && rotation.alpha < 29.0);
        assert_eq!(rotation.beta, 0.0);
    }

    #[test]
    fn tilt_is_capped_at_gravity() {
        let event = sample(0.0, 100.0);
        assert!(event.acceleration_including_gravity.z.abs() < 1e-9);
    }
}
