//! View placement for a single node
//!
//! Every structural operation places at most one node, and always relative to
//! a neighbour in the post-mutation order. The neighbours are described by the
//! sequence of *other* nodes, i.e. the post-mutation sequence without the node
//! being placed.

use core_types::NodeId;
use tracing::trace;
use view_types::{InsertPosition, ViewError, ViewRoot};

/// How a node is attached to the view root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Right after the node at `position - 1`
    After(NodeId),
    /// Right before the node that will follow position 0
    Before(NodeId),
    /// No neighbour: straight onto the root
    Append,
}

impl Placement {
    /// Resolves the anchor for a node landing at `position`
    ///
    /// `others(i)` returns the `i`-th node of the post-mutation sequence with
    /// the placed node left out.
    pub fn resolve<F>(position: usize, others: F) -> Self
    where
        F: Fn(usize) -> Option<NodeId>,
    {
        let placement = if position > 0 {
            others(position - 1).map_or(Placement::Append, Placement::After)
        } else {
            others(0).map_or(Placement::Append, Placement::Before)
        };
        trace!(position, ?placement, "resolved placement");
        placement
    }

    /// Returns the anchor node, if the placement has one
    pub fn anchor(&self) -> Option<NodeId> {
        match self {
            Placement::After(anchor) | Placement::Before(anchor) => Some(*anchor),
            Placement::Append => None,
        }
    }

    /// Verifies the anchor is attached without touching the root
    pub fn check<R: ViewRoot>(&self, root: &R) -> Result<(), ViewError> {
        match self.anchor() {
            Some(anchor) if !root.contains(anchor) => Err(ViewError::AnchorNotAttached(anchor)),
            _ => Ok(()),
        }
    }

    /// Attaches `node` to the root
    pub fn apply<R: ViewRoot>(self, root: &mut R, node: NodeId) -> Result<(), ViewError> {
        match self {
            Placement::After(anchor) => root.insert_adjacent(anchor, InsertPosition::AfterEnd, node),
            Placement::Before(anchor) => {
                root.insert_adjacent(anchor, InsertPosition::BeforeBegin, node)
            }
            Placement::Append => root.append_child(node),
        }
    }
}
