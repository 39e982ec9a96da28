use parking_lot::RwLock;

/// Ambient query for the current screen rotation.
pub trait ScreenOrientation {
    /// Degrees, usually one of 0, 90, -90 or 180.
    /// `None` if the platform has no notion of screen rotation.
    fn angle(&self) -> Option<i32>;
}

/// Orientation that is set from the outside, by a host window or a test.
pub struct SharedOrientation {
    angle: RwLock<Option<i32>>,
}

impl SharedOrientation {
    pub fn new(angle: Option<i32>) -> Self {
        SharedOrientation {
            angle: RwLock::new(angle),
        }
    }

    /// Only changes the value. Listeners find out once an
    /// `Event::OrientationChange` is posted.
    pub fn set(&self, angle: Option<i32>) {
        *self.angle.write() = angle;
    }
}

impl Default for SharedOrientation {
    fn default() -> Self {
        SharedOrientation::new(Some(0))
    }
}

impl ScreenOrientation for SharedOrientation {
    fn angle(&self) -> Option<i32> {
        *self.angle.read()
    }
}

/// For hosts without a screen rotation, e.g. desktops.
pub struct NoOrientation;

impl ScreenOrientation for NoOrientation {
    fn angle(&self) -> Option<i32> {
        None
    }
}
