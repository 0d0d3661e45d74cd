//! In-memory collaborators.
//!
//! These hold pre-computed geometry instead of running a layout engine, which
//! makes them suitable for tests and for embedders that already know where
//! every element landed.

use crate::document::{DocumentFrame, ElementLocation};
use crate::print::{LayoutHost, PrintContext, SecondaryDocument};
use crate::surface::DrawingSurface;
use folio_types::{Rect, Size};
use std::cell::RefCell;
use url::Url;

/// Handle to an element of an [`InMemoryFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl ElementData {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A flat list of elements with fixed page locations.
///
/// Locations live behind a `RefCell` so tests can move an element after a
/// pager has borrowed the frame, the way a late reflow would.
#[derive(Debug, Default)]
pub struct InMemoryFrame {
    url: Option<Url>,
    base_url: Option<Url>,
    elements: Vec<ElementData>,
    locations: RefCell<Vec<ElementLocation>>,
}

impl InMemoryFrame {
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Default::default()
        }
    }

    /// A frame with no URL, like a document set from a string.
    pub fn without_url() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Appends an element in document order.
    pub fn push(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        location: ElementLocation,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.locations.borrow_mut().push(location);
        id
    }

    /// Changes where `element` is reported to be.
    pub fn move_element(&self, element: ElementId, location: ElementLocation) {
        if let Some(slot) = self.locations.borrow_mut().get_mut(element.0) {
            *slot = location;
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn matching(&self, selector: &str) -> impl Iterator<Item = ElementId> + '_ {
        let selector = selector.trim().to_ascii_lowercase();
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.tag == selector)
            .map(|(i, _)| ElementId(i))
    }
}

impl DocumentFrame for InMemoryFrame {
    type Element = ElementId;
    type Context = StaticPrintContext;

    fn find_all_elements(&self, selector: &str) -> Vec<ElementId> {
        self.matching(selector).collect()
    }

    fn find_first_element(&self, selector: &str) -> Option<ElementId> {
        self.matching(selector).next()
    }

    fn element_attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(element.0)
            .and_then(|e| e.attribute(name))
            .map(str::to_string)
    }

    fn find_anchor(&self, fragment: &str) -> Option<ElementId> {
        if fragment.is_empty() {
            return None;
        }
        let by_id = self
            .elements
            .iter()
            .position(|e| e.attribute("id") == Some(fragment));
        let by_name = || {
            self.elements
                .iter()
                .position(|e| e.tag == "a" && e.attribute("name") == Some(fragment))
        };
        by_id.or_else(by_name).map(ElementId)
    }

    fn element_location(&self, element: ElementId, _context: &StaticPrintContext) -> ElementLocation {
        self.locations
            .borrow()
            .get(element.0)
            .copied()
            .unwrap_or_default()
    }

    fn base_url(&self) -> Option<Url> {
        self.base_url.clone().or_else(|| self.url.clone())
    }

    fn url(&self) -> Option<Url> {
        self.url.clone()
    }
}

impl LayoutHost for InMemoryFrame {
    type Secondary = StaticDocument;

    fn create_secondary(&self) -> StaticDocument {
        log::debug!("InMemoryFrame: creating secondary document");
        StaticDocument::default()
    }
}

/// A print context with a fixed number of pages. Spooling a page paints a
/// single `page N` text run covering the page.
#[derive(Debug, Default)]
pub struct StaticPrintContext {
    pages: usize,
    page_height: f32,
    active: bool,
    spooled: Vec<usize>,
}

impl StaticPrintContext {
    pub fn new(pages: usize) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// True between `begin` and `end`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pages spooled so far, in call order.
    pub fn spooled(&self) -> &[usize] {
        &self.spooled
    }
}

impl PrintContext for StaticPrintContext {
    fn begin(&mut self, _width: f32, height: f32) {
        self.active = true;
        self.page_height = height;
    }

    fn compute_page_rects(
        &mut self,
        print_rect: Rect,
        header_height: f32,
        footer_height: f32,
        user_scale_factor: f32,
    ) -> f32 {
        let scale = if user_scale_factor > 0.0 { user_scale_factor } else { 1.0 };
        self.page_height = ((print_rect.height - header_height - footer_height) / scale).max(0.0);
        self.page_height
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn spool_page<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, page: usize, width: f32) {
        if page >= self.pages {
            return;
        }
        surface.draw_text(
            Rect::new(0.0, 0.0, width, self.page_height),
            &format!("page {}", page + 1),
        );
        self.spooled.push(page);
    }

    fn end(&mut self) {
        self.active = false;
    }
}

/// A secondary document that renders its HTML source verbatim as one text
/// run filling the page.
#[derive(Debug, Default)]
pub struct StaticDocument {
    html: String,
    size: Size,
    active: bool,
}

impl StaticDocument {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl PrintContext for StaticDocument {
    fn begin(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        self.active = true;
    }

    fn compute_page_rects(
        &mut self,
        _print_rect: Rect,
        _header_height: f32,
        _footer_height: f32,
        _user_scale_factor: f32,
    ) -> f32 {
        self.size.height
    }

    fn page_count(&self) -> usize {
        usize::from(!self.html.is_empty())
    }

    fn spool_page<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, page: usize, width: f32) {
        if page >= self.page_count() {
            return;
        }
        surface.draw_text(Rect::new(0.0, 0.0, width, self.size.height), &self.html);
    }

    fn end(&mut self) {
        self.active = false;
    }
}

impl SecondaryDocument for StaticDocument {
    fn set_html(&mut self, html: &str) {
        self.html.clear();
        self.html.push_str(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn at(page: usize) -> ElementLocation {
        ElementLocation::new(page, Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn test_find_all_in_document_order() {
        let mut frame = InMemoryFrame::without_url();
        let a1 = frame.push("a", &[("href", "#x")], at(0));
        frame.push("p", &[], at(0));
        let a2 = frame.push("A", &[("name", "x")], at(1));

        assert_eq!(frame.find_all_elements("a"), vec![a1, a2]);
        assert_eq!(frame.find_first_element("p").map(ElementId::index), Some(1));
    }

    #[test]
    fn test_find_anchor_prefers_id() {
        let mut frame = InMemoryFrame::without_url();
        let named = frame.push("a", &[("name", "intro")], at(0));
        let heading = frame.push("h1", &[("id", "intro")], at(1));

        assert_eq!(frame.find_anchor("intro"), Some(heading));
        assert_ne!(frame.find_anchor("intro"), Some(named));
        assert_eq!(frame.find_anchor("missing"), None);
        assert_eq!(frame.find_anchor(""), None);
    }

    #[test]
    fn test_move_element_changes_location() {
        let mut frame = InMemoryFrame::without_url();
        let el = frame.push("a", &[], at(0));
        let ctx = StaticPrintContext::new(2);
        frame.move_element(el, at(1));
        assert_eq!(frame.element_location(el, &ctx).page, 1);
    }

    #[test]
    fn test_base_url_falls_back_to_url() -> Result<(), url::ParseError> {
        let frame = InMemoryFrame::new(Url::parse("http://x/a.html")?);
        assert_eq!(frame.base_url(), frame.url());
        let frame = frame.with_base_url(Url::parse("http://cdn/")?);
        assert_eq!(frame.base_url().map(|u| u.to_string()), Some("http://cdn/".into()));
        Ok(())
    }

    #[test]
    fn test_static_context_spools_known_pages() {
        let mut ctx = StaticPrintContext::new(2);
        let mut surface = RecordingSurface::new();
        ctx.begin(100.0, 200.0);
        assert_eq!(ctx.compute_page_rects(Rect::new(0.0, 0.0, 100.0, 200.0), 0.0, 0.0, 1.0), 200.0);
        ctx.spool_page(&mut surface, 1, 100.0);
        ctx.spool_page(&mut surface, 5, 100.0);
        ctx.end();

        assert!(!ctx.is_active());
        assert_eq!(ctx.spooled(), &[1]);
        assert_eq!(surface.texts(), vec![(Rect::new(0.0, 0.0, 100.0, 200.0), "page 2")]);
    }

    #[test]
    fn test_static_document_replaces_content() {
        let mut doc = StaticDocument::default();
        doc.set_html("first");
        doc.set_html("second");
        assert_eq!(doc.html(), "second");
        assert_eq!(doc.page_count(), 1);
        doc.set_html("");
        assert_eq!(doc.page_count(), 0);
    }
}
