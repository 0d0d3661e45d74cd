//! PDF output for folio.
//!
//! [`AnnotationSurface`] is a drawing surface that turns painted pages,
//! header and footer text, anchors and links into a `lopdf` document.

mod error;
mod helpers;
mod surface;

pub use error::RenderError;
pub use helpers::{flip_y, pdf_rect, to_win_ansi};
pub use surface::AnnotationSurface;
