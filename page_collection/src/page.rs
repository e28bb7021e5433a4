//! Page entity

use core_types::{NodeId, PageId};

/// A content unit and the view node that renders it
///
/// Built by the rendering side, which creates the content and its node
/// together. The node handle is fixed for the page's lifetime; a collection
/// only ever changes where that node sits.
#[derive(Debug)]
pub struct Page<C> {
    id: PageId,
    view: NodeId,
    content: C,
}

impl<C> Page<C> {
    /// Creates a page with a fresh identity
    pub fn new(view: NodeId, content: C) -> Self {
        Self::with_id(PageId::new(), view, content)
    }

    /// Creates a page with a known identity
    pub fn with_id(id: PageId, view: NodeId, content: C) -> Self {
        Self { id, view, content }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    /// Handle of the page's view node
    pub fn view(&self) -> NodeId {
        self.view
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Consumes the page, handing its content back to the owner
    pub fn into_content(self) -> C {
        self.content
    }
}
