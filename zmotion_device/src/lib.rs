pub mod motion;
pub mod orientation;
pub mod reading;

pub use self::motion::{Acceleration, MotionEvent, RotationRate};
pub use self::orientation::Orientation;
pub use self::reading::{Position, SensorReading};
