//! Paginated printing with repeating headers/footers and page-local links.
//!
//! A laid-out document is split into physical pages by its print context.
//! [`PrintJob`] walks those pages, paints a header and footer into the page
//! margins and registers every anchor, internal link and hyperlink on the
//! page it landed on, so a PDF backend can emit clickable annotations.
//!
//! ```ignore
//! let settings = PrintSettings::from_json(&std::fs::read_to_string("print.json")?)?;
//! let mut out = std::fs::File::create("out.pdf")?;
//! let summary = folio::print_to_pdf(&frame, &mut context, &settings, &mut out)?;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod export;
pub mod template;

pub use config::{PrintSettings, SectionSettings};
pub use driver::{PrintJob, PrintSummary};
pub use error::FolioError;
pub use export::print_to_pdf;
pub use template::TemplateCallback;

pub use folio_header_footer::HeaderFooter;
pub use folio_links::LinkPager;
pub use folio_render_lopdf::AnnotationSurface;
pub use folio_traits::{
    DocumentFrame, DrawingSurface, LayoutHost, PrintCallback, PrintContext, PrinterConfig,
    SecondaryDocument,
};
pub use folio_types::{AnchorName, Margins, Point, Rect, Size, Unit};
