//! Value types shared by every folio crate: geometry, printer units and
//! anchor names.

pub mod geometry;
pub mod ids;
pub mod units;

pub use geometry::{Point, Rect, Size};
pub use ids::AnchorName;
pub use units::{Margins, POINTS_PER_INCH, Unit};
