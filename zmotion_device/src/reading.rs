use crate::motion::{Acceleration, RotationRate};


/// Scaled, axis corrected acceleration handed to the render function.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }
}

/// The most recent reading seen by an adapter.
///
/// All axes are `None` until the first motion event arrives. After that every
/// event replaces the whole reading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorReading {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub rotation: Option<RotationRate>,
}

impl SensorReading {
    pub const UNSET: SensorReading = SensorReading {
        x: None,
        y: None,
        z: None,
        rotation: None,
    };

    pub fn new(accel: Acceleration, rotation: Option<RotationRate>) -> Self {
        SensorReading {
            x: Some(accel.x),
            y: Some(accel.y),
            z: Some(accel.z),
            rotation,
        }
    }

    /// True when at least one axis holds a non-zero number.
    ///
    /// A reading of exactly zero on every axis is indistinguishable from one
    /// that was never set. Some platforms expose the motion API without any
    /// hardware behind it, so this is what decides whether data is shown.
    pub fn is_set(&self) -> bool {
        truthy(self.x) || truthy(self.y) || truthy(self.z)
    }

    pub fn position(&self) -> Option<Position> {
        if !self.is_set() {
            return None;
        }

        Some(Position {
            x: self.x?,
            y: self.y?,
            z: self.z?,
        })
    }
}

fn truthy(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}
