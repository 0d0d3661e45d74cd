use folio_render_lopdf::RenderError;
use thiserror::Error;

/// Errors surfaced while configuring or exporting a print job.
///
/// Pagination and link painting themselves never fail; everything here comes
/// from reading settings, compiling templates or writing output.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid print settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

