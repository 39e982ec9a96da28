use zmotion_device::MotionEvent;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    MotionUpdate(MotionEvent),
    /// The new angle is read through the engine's orientation query
    OrientationChange,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::MotionUpdate(_) => EventKind::MotionUpdate,
            Event::OrientationChange => EventKind::OrientationChange,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    MotionUpdate,
    OrientationChange,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::MotionUpdate => write!(f, "motion update"),
            EventKind::OrientationChange => write!(f, "orientation change"),
        }
    }
}
