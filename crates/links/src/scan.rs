//! Document-wide discovery of anchors, internal links and hyperlinks.

use crate::index::{Hyperlink, Link};
use folio_traits::DocumentFrame;
use folio_types::AnchorName;
use log::debug;
use std::collections::HashMap;
use url::Url;

/// Everything found by one pass over the document's `a` elements, before
/// it is split by page.
#[derive(Debug)]
pub(crate) struct Discovery<E> {
    pub anchors: HashMap<AnchorName, E>,
    pub links: Vec<Link<E>>,
    pub hyperlinks: Vec<Hyperlink<E>>,
}

impl<E> Default for Discovery<E> {
    fn default() -> Self {
        Self {
            anchors: HashMap::new(),
            links: Vec::new(),
            hyperlinks: Vec::new(),
        }
    }
}

impl<E: Copy> Discovery<E> {
    fn add_anchor(&mut self, name: impl Into<AnchorName>, element: E) {
        let name = name.into();
        debug!("LinkPager: found anchor '{}'", name);
        if self.anchors.insert(name.clone(), element).is_some() {
            debug!("LinkPager: anchor '{}' redefined, keeping the later element", name);
        }
    }

    fn add_link(&mut self, element: E, target: String) {
        debug!("LinkPager: found link to '{}'", target);
        self.links.push(Link { element, target });
    }

    fn add_hyperlink(&mut self, element: E, href: String) {
        debug!("LinkPager: found hyperlink '{}'", href);
        self.hyperlinks.push(Hyperlink { element, href });
    }
}

/// Resolves `href` against `base`. Without a base only absolute URLs resolve.
pub(crate) fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    match base {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}

fn without_fragment(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}

/// Scans every `a` element of `frame` in document order.
pub(crate) fn discover<F: DocumentFrame>(frame: &F) -> Discovery<F::Element> {
    let mut found = Discovery::default();
    let base_url = frame.base_url();
    let document_url = frame.url().map(|u| without_fragment(&u));

    for element in frame.find_all_elements("a") {
        if let Some(name) = frame
            .element_attribute(element, "name")
            .filter(|n| !n.is_empty())
        {
            found.add_anchor(name, element);
        }

        let href = frame.element_attribute(element, "href").unwrap_or_default();

        if let Some(fragment) = href.strip_prefix('#') {
            if fragment.is_empty() {
                continue;
            }
            if let Some(target) = frame.find_anchor(fragment) {
                found.add_anchor(fragment, target);
            }
            // Dangling targets stay clickable.
            found.add_link(element, fragment.to_string());
            continue;
        }

        if href.is_empty() {
            continue;
        }

        let Some(resolved) = resolve_href(base_url.as_ref(), &href) else {
            // Cannot be the document itself, so it is filed as written.
            debug!("LinkPager: href '{}' has no usable base", href);
            found.add_hyperlink(element, href);
            continue;
        };

        if document_url.as_ref() == Some(&without_fragment(&resolved)) {
            let target = match resolved.fragment() {
                None => frame.find_first_element("body"),
                Some(fragment) => frame.find_anchor(fragment),
            };
            match target {
                Some(target) => {
                    let key = resolved.to_string();
                    found.add_anchor(key.as_str(), target);
                    found.add_link(element, key);
                }
                None => debug!("LinkPager: self link '{}' has no target", href),
            }
        } else {
            found.add_hyperlink(element, href);
        }
    }

    found
}
