//! Print settings read from JSON.

use crate::error::FolioError;
use folio_traits::{FixedResolutionPrinter, PrinterConfig};
use folio_types::{Margins, Size, Unit};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A header or footer band.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionSettings {
    /// Band height in points.
    pub height: f64,
    /// Handlebars template producing the band's HTML.
    #[serde(default)]
    pub template: String,
}

/// Everything a print job needs besides the document itself.
///
/// ```json
/// {
///   "paper": { "width": 595, "height": 842 },
///   "margins": { "left": 36, "top": 36, "right": 36, "bottom": 36 },
///   "dpi": 300,
///   "header": { "height": 20, "template": "<b>{{title}}</b>" },
///   "footer": { "height": 16, "template": "{{page}} / {{totalPages}}" },
///   "data": { "title": "Quarterly report" }
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrintSettings {
    /// Paper size in points. Defaults to A4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<Size>,
    /// Page margins in points. Defaults to 10mm on every side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<SectionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<SectionSettings>,
    /// Extra values available to the header and footer templates.
    #[serde(default)]
    pub data: Value,
}

impl PrintSettings {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A printer with these settings applied on top of the A4 defaults.
    pub fn printer(&self) -> FixedResolutionPrinter {
        let defaults = FixedResolutionPrinter::a4();
        FixedResolutionPrinter::new(
            self.paper.unwrap_or_else(|| defaults.paper_size(Unit::Point)),
            self.margins.unwrap_or_else(|| defaults.page_margins(Unit::Point)),
            self.dpi.unwrap_or_else(|| defaults.dpi()),
        )
    }
}
