//! The document collaborator: element queries plus the geometry oracle.

use crate::print::PrintContext;
use folio_types::Rect;
use std::fmt::Debug;
use url::Url;

/// Where an element ended up after pagination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementLocation {
    /// Physical page the element is filed under. An element whose box
    /// straddles a page break reports a single page here.
    pub page: usize,
    /// Bounding box in page-local device pixels.
    pub rect: Rect,
}

impl ElementLocation {
    pub fn new(page: usize, rect: Rect) -> Self {
        Self { page, rect }
    }
}

/// A laid-out document that can be queried for elements and their geometry.
///
/// The frame owns its elements. `Element` is a lightweight handle the frame
/// hands out; callers copy it around freely and never free it.
///
/// # Example
///
/// ```ignore
/// for a in frame.find_all_elements("a") {
///     if let Some(href) = frame.element_attribute(a, "href") {
///         let loc = frame.element_location(a, &ctx);
///         println!("{href} on page {}", loc.page);
///     }
/// }
/// ```
pub trait DocumentFrame {
    /// Non-owning element handle.
    type Element: Copy + Eq + Debug;

    /// The pagination state `element_location` answers against.
    type Context: PrintContext;

    /// All elements matching a tag selector, in document order.
    fn find_all_elements(&self, selector: &str) -> Vec<Self::Element>;

    /// The first element matching a tag selector.
    fn find_first_element(&self, selector: &str) -> Option<Self::Element>;

    /// Attribute value, or `None` when the attribute is not present.
    fn element_attribute(&self, element: Self::Element, name: &str) -> Option<String>;

    /// Resolves a fragment to the element it names (by `id`, then by `<a name>`).
    fn find_anchor(&self, fragment: &str) -> Option<Self::Element>;

    /// Page number and page-local rectangle of `element` under `context`.
    fn element_location(&self, element: Self::Element, context: &Self::Context)
    -> ElementLocation;

    /// The URL relative references are resolved against.
    fn base_url(&self) -> Option<Url> {
        self.url()
    }

    /// The URL the document was loaded from.
    fn url(&self) -> Option<Url>;
}
