//! Page-local anchors and links.
//!
//! [`LinkPager`] scans a laid-out document once for `a` elements, sorts what
//! it finds into anchors, same-document links and external hyperlinks, and
//! files each under the physical page the geometry oracle reports for it.
//! During printing the driver asks it to paint one page at a time.

mod index;
mod pager;
mod scan;

pub use index::{Hyperlink, Link, PageEntries, PageIndex};
pub use pager::LinkPager;
