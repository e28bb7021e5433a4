//! In-memory view root

use crate::{InsertPosition, PageClassNames, ViewError, ViewRoot};
use core_types::NodeId;

/// Ordered list of attached node handles
///
/// Every structural change bumps `revision`, so a renderer sharing the root
/// can tell whether it needs to redraw.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewRoot {
    /// Attached children in view order
    children: Vec<NodeId>,
    /// Monotonic structural revision
    revision: u64,
    /// Class names configured by the renderer
    class_names: PageClassNames,
}

impl MemoryViewRoot {
    /// Creates an empty view root with default class names
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty view root carrying the given class names
    pub fn with_class_names(class_names: PageClassNames) -> Self {
        Self {
            class_names,
            ..Self::default()
        }
    }

    /// Returns the configured class names
    pub fn class_names(&self) -> &PageClassNames {
        &self.class_names
    }

    /// Returns the structural revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the view-order position of an attached node
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.children.iter().position(|child| *child == node)
    }

    /// Returns the attached children without copying
    pub fn as_slice(&self) -> &[NodeId] {
        &self.children
    }

    fn unlink(&mut self, node: NodeId) {
        if let Some(pos) = self.position(node) {
            self.children.remove(pos);
        }
    }
}

impl ViewRoot for MemoryViewRoot {
    fn append_child(&mut self, node: NodeId) -> Result<(), ViewError> {
        self.unlink(node);
        self.children.push(node);
        self.revision += 1;
        Ok(())
    }

    fn insert_adjacent(
        &mut self,
        anchor: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> Result<(), ViewError> {
        if anchor == node {
            return Err(ViewError::SelfAnchor(node));
        }
        if self.position(anchor).is_none() {
            return Err(ViewError::AnchorNotAttached(anchor));
        }

        // Unlink first; the anchor's index may shift
        self.unlink(node);
        let anchor_pos = self
            .position(anchor)
            .ok_or(ViewError::AnchorNotAttached(anchor))?;
        let at = match position {
            InsertPosition::BeforeBegin => anchor_pos,
            InsertPosition::AfterEnd => anchor_pos + 1,
        };
        self.children.insert(at, node);
        self.revision += 1;
        Ok(())
    }

    fn detach(&mut self, node: NodeId) -> Result<(), ViewError> {
        let pos = self.position(node).ok_or(ViewError::NotAttached(node))?;
        self.children.remove(pos);
        self.revision += 1;
        Ok(())
    }

    fn clear(&mut self) {
        if self.children.is_empty() {
            return;
        }
        self.children.clear();
        self.revision += 1;
    }

    fn children(&self) -> Vec<NodeId> {
        self.children.clone()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }
}
