use serde::{Deserialize, Serialize};

/// An axis-aligned box as reported by the layout engine.
///
/// Depending on where it comes from this is either absolute (a raw
/// measurement) or relative to a container boundary (an accepted geometry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        top: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Translate this box into the coordinate space whose origin is the
    /// top-left corner of `origin`. Size is unchanged.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect {
            top: self.top - origin.top,
            left: self.left - origin.left,
            width: self.width,
            height: self.height,
        }
    }
}
