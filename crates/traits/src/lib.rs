//! Collaborator interfaces for folio.
//!
//! The link pager and header/footer compositor never touch a concrete DOM,
//! printer or painter. They talk to the traits here, and this crate also
//! ships in-memory implementations of each.

pub mod callback;
pub mod document;
pub mod memory;
pub mod print;
pub mod printer;
pub mod surface;

pub use callback::PrintCallback;
pub use document::{DocumentFrame, ElementLocation};
pub use memory::{ElementId, InMemoryFrame, StaticDocument, StaticPrintContext};
pub use print::{LayoutHost, PrintContext, SecondaryDocument};
pub use printer::{FixedResolutionPrinter, PrinterConfig};
pub use surface::{DrawingSurface, RecordingSurface, SurfaceOp};
