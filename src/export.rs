//! One-call PDF export.

use crate::config::PrintSettings;
use crate::driver::{PrintJob, PrintSummary};
use crate::error::FolioError;
use crate::template::TemplateCallback;
use folio_render_lopdf::AnnotationSurface;
use folio_traits::{DocumentFrame, LayoutHost};
use std::io::Write;

/// Prints `frame` with `settings` and writes the result to `writer` as PDF.
pub fn print_to_pdf<F, W>(
    frame: &F,
    context: &mut F::Context,
    settings: &PrintSettings,
    writer: &mut W,
) -> Result<PrintSummary, FolioError>
where
    F: DocumentFrame + LayoutHost,
    W: Write,
{
    let callback = TemplateCallback::new(settings)?;
    let mut printer = settings.printer();
    let mut surface = AnnotationSurface::new(printer.dpi());

    let summary = PrintJob::new(frame, &mut printer).run(context, Some(callback), &mut surface);
    surface.save_to(writer)?;
    Ok(summary)
}
