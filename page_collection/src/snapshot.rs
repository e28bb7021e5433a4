//! Order snapshot for comparison and persistence

use core_types::{NodeId, PageId};
use serde::{Deserialize, Serialize};

/// Page order at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    /// Page identities in sequence order
    pub pages: Vec<PageId>,
    /// View nodes in sequence order
    pub views: Vec<NodeId>,
}

impl CollectionSnapshot {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Position of a page in the captured order
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|id| *id == page)
    }
}
