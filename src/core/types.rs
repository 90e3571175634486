use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// Byte used to join reference sequences into the search corpus.
///
/// It must never occur in a reference or a query, which is what keeps a match
/// from straddling two references. The offset arithmetic in
/// [`crate::catalog::store`] assumes it is exactly one byte wide.
pub const DELIMITER: u8 = b'|';

/// Flank character reported when a match touches the edge of its reference
pub const SENTINEL: char = '-';

/// Identifier of a reference sequence (FASTA record name)
///
/// Shared between the store and every occurrence that points at it, so
/// cloning is a reference-count bump rather than a string copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(pub Arc<str>);

impl ReferenceId {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(Arc::from(s.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for ReferenceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReferenceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
