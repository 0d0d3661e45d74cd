pub mod fixtures;
pub mod pdf_assertions;

use folio::{PrintSettings, PrintSummary};
use folio_traits::{InMemoryFrame, StaticPrintContext};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub summary: PrintSummary,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Prints `frame` over `pages` pages with settings parsed from `settings_json`.
pub fn generate_pdf(
    frame: &InMemoryFrame,
    pages: usize,
    settings_json: &str,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let settings = PrintSettings::from_json(settings_json)?;
    let mut context = StaticPrintContext::new(pages);
    let mut bytes = Vec::new();
    let summary = folio::print_to_pdf(frame, &mut context, &settings, &mut bytes)?;
    let doc = LopdfDocument::load_mem(&bytes)?;
    Ok(GeneratedPdf {
        bytes,
        doc,
        summary,
    })
}
