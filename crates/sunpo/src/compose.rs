use serde::Serialize;

/// Four-sided spacing values, already scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Width classes ordered by their minimum normalized width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// The smallest normalized width that satisfies this breakpoint.
    pub fn min_width(self) -> f64 {
        match self {
            Breakpoint::Sm => 480.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
        }
    }

    /// The widest breakpoint `device_width` satisfies, if any.
    pub fn current(device_width: f64) -> Option<Self> {
        [Breakpoint::Xl, Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm]
            .into_iter()
            .find(|breakpoint| device_width >= breakpoint.min_width())
    }
}

/// Main-axis direction for orientation-driven layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Layout descriptor for the current orientation, carrying the raw
/// (orientation-sensitive) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientationLayout {
    pub direction: FlexDirection,
    pub width: f64,
    pub height: f64,
}
