//! The per-page partition of discovered anchors, links and hyperlinks.

use folio_types::AnchorName;
use std::collections::BTreeMap;

/// An element that jumps to a location inside the same document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<E> {
    pub element: E,
    /// Anchor name: either a bare fragment or a full same-document URL.
    pub target: String,
}

/// An element that navigates to a resource outside the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink<E> {
    pub element: E,
    /// The `href` exactly as written in the document.
    pub href: String,
}

/// Everything filed under one physical page.
#[derive(Debug, Clone)]
pub struct PageEntries<E> {
    pub anchors: BTreeMap<AnchorName, E>,
    pub links: Vec<Link<E>>,
    pub hyperlinks: Vec<Hyperlink<E>>,
}

impl<E> Default for PageEntries<E> {
    fn default() -> Self {
        Self {
            anchors: BTreeMap::new(),
            links: Vec::new(),
            hyperlinks: Vec::new(),
        }
    }
}

impl<E> PageEntries<E> {
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty() && self.links.is_empty() && self.hyperlinks.is_empty()
    }
}

/// Page-number keyed buckets. Page numbers are small and dense, so the
/// index is a plain vector; pages nobody was filed under stay empty.
#[derive(Debug, Clone)]
pub struct PageIndex<E> {
    pages: Vec<PageEntries<E>>,
}

impl<E> Default for PageIndex<E> {
    fn default() -> Self {
        Self { pages: Vec::new() }
    }
}

impl<E> PageIndex<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for `page`, or `None` when nothing was ever filed that far.
    pub fn page(&self, page: usize) -> Option<&PageEntries<E>> {
        self.pages.get(page)
    }

    /// Number of page slots, i.e. one past the highest page filed under.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(PageEntries::is_empty)
    }

    pub fn anchor_count(&self) -> usize {
        self.pages.iter().map(|p| p.anchors.len()).sum()
    }

    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }

    pub fn hyperlink_count(&self) -> usize {
        self.pages.iter().map(|p| p.hyperlinks.len()).sum()
    }

    pub fn insert_anchor(&mut self, page: usize, name: AnchorName, element: E) {
        self.entries_mut(page).anchors.insert(name, element);
    }

    pub fn push_link(&mut self, page: usize, link: Link<E>) {
        self.entries_mut(page).links.push(link);
    }

    pub fn push_hyperlink(&mut self, page: usize, hyperlink: Hyperlink<E>) {
        self.entries_mut(page).hyperlinks.push(hyperlink);
    }

    fn entries_mut(&mut self, page: usize) -> &mut PageEntries<E> {
        if page >= self.pages.len() {
            self.pages.resize_with(page + 1, PageEntries::default);
        }
        &mut self.pages[page]
    }
}
