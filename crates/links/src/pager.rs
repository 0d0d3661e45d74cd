use crate::index::{Hyperlink, Link, PageIndex};
use crate::scan::{self, Discovery};
use folio_traits::{DocumentFrame, DrawingSurface};
use folio_types::AnchorName;
use log::{debug, warn};
use url::Url;

/// Files every anchor and link of a document under the physical page it
/// landed on, and paints a page's worth of them on request.
///
/// The index is built once in [`LinkPager::new`] and never changes. Pages
/// are assigned from the geometry oracle at scan time; rectangles are asked
/// for again at paint time, once pagination has settled.
///
/// Nothing here fails: a missing frame yields an empty pager, and hrefs that
/// cannot be resolved are skipped.
#[derive(Debug)]
pub struct LinkPager<'f, F: DocumentFrame> {
    frame: Option<&'f F>,
    base_url: Option<Url>,
    index: PageIndex<F::Element>,
}

impl<'f, F: DocumentFrame> LinkPager<'f, F> {
    /// Scans `frame` and builds the page index against `context`.
    pub fn new(frame: Option<&'f F>, context: &F::Context) -> Self {
        let Some(frame) = frame else {
            debug!("LinkPager: no frame, nothing to index");
            return Self {
                frame: None,
                base_url: None,
                index: PageIndex::new(),
            };
        };

        let discovery = scan::discover(frame);
        let index = Self::paginate(frame, context, discovery);
        debug!(
            "LinkPager: indexed {} anchors, {} links, {} hyperlinks over {} pages",
            index.anchor_count(),
            index.link_count(),
            index.hyperlink_count(),
            index.len()
        );

        Self {
            frame: Some(frame),
            base_url: frame.base_url(),
            index,
        }
    }

    fn paginate(
        frame: &F,
        context: &F::Context,
        discovery: Discovery<F::Element>,
    ) -> PageIndex<F::Element> {
        let mut index = PageIndex::new();
        let page_of = |element| frame.element_location(element, context).page;

        for (name, element) in discovery.anchors {
            index.insert_anchor(page_of(element), name, element);
        }
        for link in discovery.links {
            index.push_link(page_of(link.element), link);
        }
        for hyperlink in discovery.hyperlinks {
            index.push_hyperlink(page_of(hyperlink.element), hyperlink);
        }
        index
    }

    /// Registers every anchor, link and hyperlink filed under `page` on
    /// `surface`. Pages with no entries, including out-of-range ones, paint
    /// nothing.
    pub fn paint_links<S: DrawingSurface + ?Sized>(
        &self,
        page: usize,
        surface: &mut S,
        context: &F::Context,
    ) {
        let (Some(frame), Some(entries)) = (self.frame, self.index.page(page)) else {
            return;
        };

        for (name, element) in &entries.anchors {
            let location = frame.element_location(*element, context);
            debug!(
                "LinkPager: paint anchor '{}' on page {} at {:?}",
                name, location.page, location.rect
            );
            surface.add_anchor(location.rect, name.as_str());
        }

        for link in &entries.links {
            let location = frame.element_location(link.element, context);
            debug!(
                "LinkPager: paint link to '{}' on page {} at {:?}",
                link.target, location.page, location.rect
            );
            surface.add_link(location.rect, &link.target);
        }

        for hyperlink in &entries.hyperlinks {
            let Some(url) = self.hyperlink_url(&hyperlink.href) else {
                warn!("LinkPager: cannot parse hyperlink '{}', skipping", hyperlink.href);
                continue;
            };
            let location = frame.element_location(hyperlink.element, context);
            debug!(
                "LinkPager: paint hyperlink '{}' on page {} at {:?}",
                url, location.page, location.rect
            );
            surface.add_hyperlink(location.rect, &url);
        }
    }

    fn hyperlink_url(&self, href: &str) -> Option<Url> {
        Url::parse(href)
            .ok()
            .or_else(|| scan::resolve_href(self.base_url.as_ref(), href))
    }

    pub fn index(&self) -> &PageIndex<F::Element> {
        &self.index
    }

    /// Anchors filed under `page`, in name order.
    pub fn anchors_on(&self, page: usize) -> impl Iterator<Item = (&AnchorName, F::Element)> {
        self.index
            .page(page)
            .into_iter()
            .flat_map(|p| p.anchors.iter().map(|(name, el)| (name, *el)))
    }

    /// Internal links filed under `page`, in document order.
    pub fn links_on(&self, page: usize) -> &[Link<F::Element>] {
        self.index
            .page(page)
            .map(|p| p.links.as_slice())
            .unwrap_or_default()
    }

    /// Hyperlinks filed under `page`, in document order.
    pub fn hyperlinks_on(&self, page: usize) -> &[Hyperlink<F::Element>] {
        self.index
            .page(page)
            .map(|p| p.hyperlinks.as_slice())
            .unwrap_or_default()
    }

    /// Number of page slots in the index.
    pub fn page_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
