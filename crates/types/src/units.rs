use serde::{Deserialize, Serialize};

/// Points per inch. One point is 1/72 inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// The measurement unit a printer value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    /// Typographic points (1/72 inch). User-facing heights are given in points.
    Point,
    /// Pixels of the output device. The drawing surface works in this unit.
    DevicePixel,
}

/// Page margins, in whatever [`Unit`] they were requested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
}

impl Margins {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Applies `f` to every side.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            left: f(self.left),
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
        }
    }
}
