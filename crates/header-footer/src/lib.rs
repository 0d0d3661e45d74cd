//! Repeating headers and footers.
//!
//! [`HeaderFooter`] turns point heights requested by a [`PrintCallback`]
//! into device-pixel margins on the printer, then on every page renders the
//! callback's content in a private secondary document and spools it into
//! the top or bottom margin.
//!
//! [`PrintCallback`]: folio_traits::PrintCallback

mod compositor;
mod guard;

pub use compositor::{HeaderFooter, reserve_margins};
pub use guard::OriginGuard;
