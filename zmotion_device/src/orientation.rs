/// How the screen is being held, derived from the platform's rotation angle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Angles are in degrees. Only a quarter turn either way counts as landscape,
    /// upside down (180) is still portrait. No angle at all means the platform
    /// doesn't report one, which is treated as portrait.
    pub fn from_angle(angle: Option<i32>) -> Self {
        match angle {
            Some(90) | Some(-90) => Orientation::Landscape,
            _ => Orientation::Portrait,
        }
    }

    pub fn is_landscape(&self) -> bool {
        *self == Orientation::Landscape
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}
