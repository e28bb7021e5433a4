//! Identities that tie a page to its view node
//!
//! A page collection compares pages by `PageId` and orders the view root by
//! `NodeId`. Both are random v4 UUIDs and serialize as the bare UUID string.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one page in a collection
///
/// Survives every reorder: after a move, `index_of` finds the page by this
/// ID at its new index. Pages carrying equal content still get distinct IDs,
/// and a collection refuses a second page with an ID it already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Mints an identity for a freshly built page
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Restores a page identity, e.g. from a saved snapshot
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Handle of the element a page renders into
///
/// The renderer creates it together with the page and never swaps it out.
/// Collection operations only attach, detach and reposition it under the
/// view root, whose child order is a list of these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocates a handle for a new page element
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}
