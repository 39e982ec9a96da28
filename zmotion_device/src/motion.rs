#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Acceleration is in m/s^2, one value per device axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Acceleration {
    /// Positive = towards the right edge of the screen
    pub x: f64,
    /// Positive = towards the top edge of the screen
    pub y: f64,
    /// Positive = out of the screen, towards the viewer
    pub z: f64,
}

impl Acceleration {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Acceleration { x, y, z }
    }

    /// Exchanges the x and y axes. z is left alone.
    pub fn swap_xy(self) -> Self {
        Acceleration {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }

    pub fn scale(self, multiplier: f64) -> Self {
        Acceleration {
            x: self.x * multiplier,
            y: self.y * multiplier,
            z: self.z * multiplier,
        }
    }
}

/// Rotation rates are degrees per second
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RotationRate {
    /// Around the z axis
    pub alpha: f64,
    /// Around the x axis
    pub beta: f64,
    /// Around the y axis
    pub gamma: f64,
}

impl RotationRate {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        RotationRate { alpha, beta, gamma }
    }
}

/// A single motion sample as delivered by the platform.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct MotionEvent {
    /// Acceleration with the effect of gravity removed
    pub acceleration: Acceleration,
    pub acceleration_including_gravity: Acceleration,
    /// Some platforms have an accelerometer but no gyroscope
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation_rate: Option<RotationRate>,
}

impl MotionEvent {
    pub fn new(
        acceleration: Acceleration,
        acceleration_including_gravity: Acceleration,
        rotation_rate: Option<RotationRate>,
    ) -> Self {
        MotionEvent {
            acceleration,
            acceleration_including_gravity,
            rotation_rate,
        }
    }

    pub fn select_acceleration(&self, use_gravity: bool) -> Acceleration {
        if use_gravity {
            self.acceleration_including_gravity
        } else {
            self.acceleration
        }
    }
}
