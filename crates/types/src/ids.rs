//! Newtype wrappers for anchor names.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The name of a document anchor.
///
/// Anchors are keyed either by a bare fragment (`section-1`) or by a fully
/// resolved same-document URL (`http://host/doc.html#section-1`). Both forms
/// live in the same namespace, so a name is just a cheap shared string.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AnchorName(Arc<str>);

impl AnchorName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AnchorName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AnchorName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
