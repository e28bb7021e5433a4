//! # View Types
//!
//! The view-root abstraction a page collection keeps in step with.
//!
//! ## Philosophy
//!
//! - **Anchor-relative placement**: A view root has no "put node at index k"
//!   primitive. Nodes are appended, or inserted next to an attached anchor.
//! - **Structure only**: The root orders node handles; what a node renders is
//!   owned by the rendering side.
//! - **Shared, single-threaded**: Roots are shared with renderers through
//!   `Rc<RefCell<_>>`; renderers read, the page collection mutates.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A DOM implementation
//! - A layout engine
//! - A content renderer

pub mod class_names;
pub mod memory;

use core_types::NodeId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

pub use class_names::PageClassNames;
pub use memory::MemoryViewRoot;

/// Where a node goes relative to an anchor node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertPosition {
    /// Immediately before the anchor, as its previous sibling
    BeforeBegin,
    /// Immediately after the anchor, as its next sibling
    AfterEnd,
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertPosition::BeforeBegin => write!(f, "beforebegin"),
            InsertPosition::AfterEnd => write!(f, "afterend"),
        }
    }
}

/// View root error types
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("Node is not attached to the view root: {0}")]
    NotAttached(NodeId),

    #[error("Anchor is not attached to the view root: {0}")]
    AnchorNotAttached(NodeId),

    #[error("Node cannot be placed relative to itself: {0}")]
    SelfAnchor(NodeId),
}

/// An ordered container of attached view nodes
///
/// Attaching a node that is already attached moves it, the same way a DOM
/// element is moved when it is inserted somewhere else.
pub trait ViewRoot {
    /// Attaches `node` as the last child
    fn append_child(&mut self, node: NodeId) -> Result<(), ViewError>;

    /// Attaches `node` next to the attached `anchor`
    fn insert_adjacent(
        &mut self,
        anchor: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<(), ViewError>;

    /// Detaches an attached node
    fn detach(&mut self, node: NodeId) -> Result<(), ViewError>;

    /// Detaches every child in one step
    fn clear(&mut self);

    /// Returns the attached children in view order
    fn children(&self) -> Vec<NodeId>;

    /// Returns the number of attached children
    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Checks if a node is attached
    fn contains(&self, node: NodeId) -> bool {
        self.children().contains(&node)
    }
}

impl<V: ViewRoot + ?Sized> ViewRoot for &mut V {
    fn append_child(&mut self, node: NodeId) -> Result<(), ViewError> {
        (**self).append_child(node)
    }

    fn insert_adjacent(
        &mut self,
        anchor: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<(), ViewError> {
        (**self).insert_adjacent(anchor, position, node)
    }

    fn detach(&mut self, node: NodeId) -> Result<(), ViewError> {
        (**self).detach(node)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn children(&self) -> Vec<NodeId> {
        (**self).children()
    }

    fn child_count(&self) -> usize {
        (**self).child_count()
    }

    fn contains(&self, node: NodeId) -> bool {
        (**self).contains(node)
    }
}

/// Shared root handle
///
/// A renderer holding a borrow across a mutation is a programming error and
/// panics like any other `RefCell` double borrow.
impl<V: ViewRoot> ViewRoot for Rc<RefCell<V>> {
    fn append_child(&mut self, node: NodeId) -> Result<(), ViewError> {
        self.borrow_mut().append_child(node)
    }

    fn insert_adjacent(
        &mut self,
        anchor: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<(), ViewError> {
        self.borrow_mut().insert_adjacent(anchor, position, node)
    }

    fn detach(&mut self, node: NodeId) -> Result<(), ViewError> {
        self.borrow_mut().detach(node)
    }

    fn clear(&mut self) {
        self.borrow_mut().clear()
    }

    fn children(&self) -> Vec<NodeId> {
        self.borrow().children()
    }

    fn child_count(&self) -> usize {
        self.borrow().child_count()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.borrow().contains(node)
    }
}
