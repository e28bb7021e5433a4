//! Ordered page sequence kept in step with a view root

use crate::event::{PageEvent, PageEventSink};
use crate::sync::Placement;
use crate::{CollectionSnapshot, Page, PageError};
use core_types::{NodeId, PageId};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use tracing::{debug, warn};
use view_types::ViewRoot;

/// Ordered pages plus the view root their nodes live under
///
/// The collection owns the sequence and borrows the root's structure: for
/// every valid `i`, `array()[i].view()` is the `i`-th of the collection's
/// nodes under the root. Each operation places or detaches view nodes first
/// and splices the sequence after, and validates before touching either.
pub struct PageCollection<C, R: ViewRoot> {
    /// Pages in authoritative order
    pages: Vec<Page<C>>,
    /// Shared container for the pages' nodes
    view_root: R,
    /// Receiver for move notifications
    sink: Option<Box<dyn PageEventSink>>,
}

impl<C, R: ViewRoot> PageCollection<C, R> {
    /// Creates an empty collection over a view root
    pub fn new(view_root: R) -> Self {
        Self {
            pages: Vec::new(),
            view_root,
            sink: None,
        }
    }

    /// Sets the event sink
    pub fn with_event_sink(mut self, sink: impl PageEventSink + 'static) -> Self {
        self.set_event_sink(sink);
        self
    }

    /// Replaces the event sink
    pub fn set_event_sink(&mut self, sink: impl PageEventSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Returns the view root
    pub fn view_root(&self) -> &R {
        &self.view_root
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Read-only ordered view of the pages
    pub fn array(&self) -> &[Page<C>] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<C>> {
        self.pages.iter()
    }

    /// Returns the page at `index`
    pub fn get(&self, index: usize) -> Result<&Page<C>, PageError> {
        self.pages.get(index).ok_or(PageError::OutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    /// Position of `page` by identity, or `None` when absent
    pub fn index_of(&self, page: &Page<C>) -> Option<usize> {
        self.index_of_id(page.id())
    }

    /// Position of the page with the given ID
    pub fn index_of_id(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    /// Appends a page after the current last one
    pub fn push(&mut self, page: Page<C>) -> Result<(), PageError> {
        self.check_incoming(&page)?;

        let len = self.pages.len();
        let placement = Placement::resolve(len, |i| self.pages.get(i).map(Page::view));
        placement.apply(&mut self.view_root, page.view())?;
        self.pages.push(page);

        debug!(len = self.pages.len(), "pushed page");
        Ok(())
    }

    /// Inserts a page at `index`, or replaces the page there
    ///
    /// An empty collection always appends. `index` past the end is clamped
    /// to `len`. With `replace`, the page previously at `index` is detached
    /// and returned; at the clamped end there is nothing to replace and the
    /// page is appended.
    pub fn insert(
        &mut self,
        index: usize,
        page: Page<C>,
        replace: bool,
    ) -> Result<Option<Page<C>>, PageError> {
        if self.pages.is_empty() {
            self.push(page)?;
            return Ok(None);
        }
        self.check_incoming(&page)?;

        let len = self.pages.len();
        let index = index.min(len);
        let replace = replace && index < len;

        let placement = if replace {
            let pages = &self.pages;
            Placement::resolve(index, |i| {
                let src = if i < index { i } else { i + 1 };
                pages.get(src).map(Page::view)
            })
        } else {
            Placement::resolve(index, |i| self.pages.get(i).map(Page::view))
        };
        placement.check(&self.view_root)?;

        if replace {
            self.view_root.detach(self.pages[index].view())?;
            placement.apply(&mut self.view_root, page.view())?;
            let old = std::mem::replace(&mut self.pages[index], page);
            debug!(index, len, "replaced page");
            Ok(Some(old))
        } else {
            placement.apply(&mut self.view_root, page.view())?;
            self.pages.insert(index, page);
            debug!(index, len = self.pages.len(), "inserted page");
            Ok(None)
        }
    }

    /// Indexed write: inserts at `index` without replacing
    pub fn set(&mut self, index: usize, page: Page<C>) -> Result<(), PageError> {
        self.insert(index, page, false).map(|_| ())
    }

    /// Removes and returns the page at `index`, or the last page for `None`
    pub fn remove(&mut self, index: Option<usize>) -> Result<Page<C>, PageError> {
        let len = self.pages.len();
        let index = index.unwrap_or_else(|| len.saturating_sub(1));
        if index >= len {
            return Err(PageError::OutOfRange { index, len });
        }

        self.view_root.detach(self.pages[index].view())?;
        let page = self.pages.remove(index);

        debug!(index, len = self.pages.len(), "removed page");
        Ok(page)
    }

    /// Detaches every node and empties the sequence
    ///
    /// Returns the removed pages in their former order.
    pub fn remove_all(&mut self) -> Vec<Page<C>> {
        self.view_root.clear();
        let removed: Vec<Page<C>> = self.pages.drain(..).collect();

        debug!(removed = removed.len(), "removed all pages");
        removed
    }

    /// Exchanges the pages at `first` and `second`
    #[deprecated(note = "use `move_page` instead")]
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), PageError> {
        self.check_index(first)?;
        self.check_index(second)?;
        if first == second {
            return Ok(());
        }

        let (low, high) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        self.check_swap_anchors(low, high)?;

        self.relocate(low, high)?;
        // The page from `low` now sits at `low + 1`
        if high > low + 1 {
            self.relocate(high, low + 1)?;
        }

        debug!(first, second, "swapped pages");
        Ok(())
    }

    /// Moves the page at `from_index` so it ends up at `to_index`
    ///
    /// Emits and returns a move event.
    pub fn move_page(&mut self, to_index: usize, from_index: usize) -> Result<PageEvent, PageError> {
        self.check_index(from_index)?;
        self.check_index(to_index)?;

        self.relocate(to_index, from_index)?;

        let event = PageEvent::moved(from_index, to_index);
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(&event);
        }

        debug!(from_index, to_index, "moved page");
        Ok(event)
    }

    /// Captures the current order
    pub fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            pages: self.pages.iter().map(Page::id).collect(),
            views: self.pages.iter().map(Page::view).collect(),
        }
    }

    /// Checks that the collection's nodes under the root match the sequence
    ///
    /// Nodes under the root that belong to nobody in the sequence are ignored.
    pub fn is_in_sync(&self) -> bool {
        let ours: HashSet<NodeId> = self.pages.iter().map(Page::view).collect();
        let attached: Vec<NodeId> = self
            .view_root
            .children()
            .into_iter()
            .filter(|node| ours.contains(node))
            .collect();

        attached.len() == self.pages.len()
            && attached
                .iter()
                .zip(&self.pages)
                .all(|(node, page)| *node == page.view())
    }

    /// Takes the page out of the sequence, places its node, puts it back
    ///
    /// Indices must already be checked.
    fn relocate(&mut self, to_index: usize, from_index: usize) -> Result<(), PageError> {
        let page = self.pages.remove(from_index);
        let placement = Placement::resolve(to_index, |i| self.pages.get(i).map(Page::view));

        if let Err(err) = placement.apply(&mut self.view_root, page.view()) {
            warn!(from_index, to_index, error = %err, "view root rejected move");
            self.pages.insert(from_index, page);
            return Err(err.into());
        }

        self.pages.insert(to_index, page);
        Ok(())
    }

    /// Verifies both swap relocations have attached anchors
    ///
    /// Replays the two steps on a copy of the node order, so a rejected
    /// second step is caught before the first one runs.
    fn check_swap_anchors(&self, low: usize, high: usize) -> Result<(), PageError> {
        let mut order: Vec<NodeId> = self.pages.iter().map(Page::view).collect();

        let moved = order.remove(high);
        Placement::resolve(low, |i| order.get(i).copied()).check(&self.view_root)?;
        order.insert(low, moved);

        if high > low + 1 {
            order.remove(low + 1);
            Placement::resolve(high, |i| order.get(i).copied()).check(&self.view_root)?;
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), PageError> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(PageError::OutOfRange {
                index,
                len: self.pages.len(),
            })
        }
    }

    /// Rejects a page already in the sequence or a node already attached
    fn check_incoming(&self, page: &Page<C>) -> Result<(), PageError> {
        if self.index_of_id(page.id()).is_some() {
            return Err(PageError::InvalidArgument {
                reason: format!("{} is already in the collection", page.id()),
            });
        }
        if self.view_root.contains(page.view()) {
            return Err(PageError::InvalidArgument {
                reason: format!("{} is already attached to the view root", page.view()),
            });
        }
        Ok(())
    }
}

impl<C, R: ViewRoot> Index<usize> for PageCollection<C, R> {
    type Output = Page<C>;

    /// Same as [`PageCollection::get`], panicking when out of range
    fn index(&self, index: usize) -> &Page<C> {
        &self.pages[index]
    }
}

impl<'a, C, R: ViewRoot> IntoIterator for &'a PageCollection<C, R> {
    type Item = &'a Page<C>;
    type IntoIter = std::slice::Iter<'a, Page<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl<C, R: ViewRoot> fmt::Debug for PageCollection<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCollection")
            .field("pages", &self.snapshot().pages)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
