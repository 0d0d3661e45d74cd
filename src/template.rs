//! Header and footer content from Handlebars templates.

use crate::config::{PrintSettings, SectionSettings};
use crate::error::FolioError;
use folio_traits::PrintCallback;
use handlebars::Handlebars;
use serde_json::{Map, Value, json};

const HEADER: &str = "header";
const FOOTER: &str = "footer";

/// A [`PrintCallback`] that renders its header and footer from templates.
///
/// Templates see the settings' `data` object flattened into the context,
/// plus `page` (1-based) and `totalPages`. A non-object `data` value is
/// exposed as `data`. A section without a template has zero height and
/// renders nothing.
pub struct TemplateCallback {
    registry: Handlebars<'static>,
    header_height: f64,
    footer_height: f64,
    data: Value,
}

impl TemplateCallback {
    /// Compiles the header and footer templates from `settings`.
    pub fn new(settings: &PrintSettings) -> Result<Self, FolioError> {
        let mut registry = Handlebars::new();
        let header_height = Self::register(&mut registry, HEADER, settings.header.as_ref())?;
        let footer_height = Self::register(&mut registry, FOOTER, settings.footer.as_ref())?;

        Ok(Self {
            registry,
            header_height,
            footer_height,
            data: settings.data.clone(),
        })
    }

    fn register(
        registry: &mut Handlebars<'static>,
        name: &str,
        section: Option<&SectionSettings>,
    ) -> Result<f64, FolioError> {
        let Some(section) = section else {
            return Ok(0.0);
        };
        registry.register_template_string(name, &section.template)?;
        Ok(section.height.max(0.0))
    }

    fn context(&self, page: usize, total_pages: usize) -> Value {
        let mut context = match &self.data {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other.clone());
                map
            }
        };
        context.insert("page".to_string(), json!(page));
        context.insert("totalPages".to_string(), json!(total_pages));
        Value::Object(context)
    }

    fn render(&self, name: &str, page: usize, total_pages: usize) -> String {
        if !self.registry.has_template(name) {
            return String::new();
        }
        match self.registry.render(name, &self.context(page, total_pages)) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Failed to render {} for page {}: {}", name, page, e);
                String::new()
            }
        }
    }
}

impl PrintCallback for TemplateCallback {
    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn footer_height(&self) -> f64 {
        self.footer_height
    }

    fn header(&self, page: usize, total_pages: usize) -> String {
        self.render(HEADER, page, total_pages)
    }

    fn footer(&self, page: usize, total_pages: usize) -> String {
        self.render(FOOTER, page, total_pages)
    }
}
