//! # Page Order Property Tests
//!
//! Random operation scripts run against a page collection and a plain `Vec`
//! model side by side.
//!
//! ## Test Philosophy
//!
//! - **Model agreement**: The sequence matches the model after every step
//! - **Order preservation**: The root's children match the sequence's views
//! - **Length conservation**: Each operation changes length by its fixed amount
//! - **Errors are side-effect free**: A rejected operation changes nothing

#![cfg(test)]

use core_types::NodeId;
use page_collection::{EventLog, Page, PageCollection, PageError, PageEvent};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use view_types::{MemoryViewRoot, ViewRoot};

type SharedRoot = Rc<RefCell<MemoryViewRoot>>;

// ============================================================================
// Operation scripts
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Push,
    Insert { index: usize, replace: bool },
    Remove(Option<usize>),
    Move { to: usize, from: usize },
    Swap(usize, usize),
    RemoveAll,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Push),
        3 => (0usize..12, any::<bool>())
            .prop_map(|(index, replace)| Op::Insert { index, replace }),
        2 => proptest::option::of(0usize..12).prop_map(Op::Remove),
        3 => (0usize..12, 0usize..12).prop_map(|(to, from)| Op::Move { to, from }),
        1 => (0usize..12, 0usize..12).prop_map(|(a, b)| Op::Swap(a, b)),
        1 => Just(Op::RemoveAll),
    ]
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    pages: PageCollection<u32, SharedRoot>,
    root: SharedRoot,
    log: Rc<RefCell<EventLog>>,
    model: Vec<u32>,
    next_label: u32,
}

impl Harness {
    fn new() -> Self {
        let root = Rc::new(RefCell::new(MemoryViewRoot::new()));
        let log = Rc::new(RefCell::new(EventLog::new()));
        let pages = PageCollection::new(Rc::clone(&root)).with_event_sink(Rc::clone(&log));
        Self {
            pages,
            root,
            log,
            model: Vec::new(),
            next_label: 0,
        }
    }

    fn fresh_page(&mut self) -> Page<u32> {
        let label = self.next_label;
        self.next_label += 1;
        Page::new(NodeId::new(), label)
    }

    fn labels(&self) -> Vec<u32> {
        self.pages.iter().map(|page| *page.content()).collect()
    }

    fn views(&self) -> Vec<NodeId> {
        self.pages.iter().map(Page::view).collect()
    }

    /// Applies `op` to both sides and checks the length change
    #[allow(deprecated)]
    fn apply(&mut self, op: &Op) -> Result<(), TestCaseError> {
        let len = self.model.len();
        match *op {
            Op::Push => {
                let page = self.fresh_page();
                self.model.push(*page.content());
                prop_assert!(self.pages.push(page).is_ok());
                prop_assert_eq!(self.pages.len(), len + 1);
            }
            Op::Insert { index, replace } => {
                let page = self.fresh_page();
                let label = *page.content();
                let replaced = self.pages.insert(index, page, replace);
                prop_assert!(replaced.is_ok());

                let at = index.min(len);
                if len > 0 && replace && at < len {
                    let old = self.model[at];
                    self.model[at] = label;
                    let replaced = replaced.ok().flatten().map(|page| *page.content());
                    prop_assert_eq!(replaced, Some(old));
                    prop_assert_eq!(self.pages.len(), len);
                } else {
                    self.model.insert(at, label);
                    prop_assert_eq!(self.pages.len(), len + 1);
                }
            }
            Op::Remove(index) => {
                let at = index.unwrap_or(len.saturating_sub(1));
                let result = self.pages.remove(index);
                if at < len {
                    let expected = self.model.remove(at);
                    prop_assert_eq!(result.map(|page| *page.content()), Ok(expected));
                    prop_assert_eq!(self.pages.len(), len - 1);
                } else {
                    prop_assert_eq!(
                        result.map(|page| *page.content()),
                        Err(PageError::OutOfRange { index: at, len })
                    );
                }
            }
            Op::Move { to, from } => {
                let events_before = self.log.borrow().events().len();
                let result = self.pages.move_page(to, from);
                if to < len && from < len {
                    let label = self.model.remove(from);
                    self.model.insert(to, label);
                    prop_assert_eq!(result, Ok(PageEvent::moved(from, to)));
                    let log = self.log.borrow();
                    prop_assert_eq!(log.last(), Some(&PageEvent::moved(from, to)));
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(self.log.borrow().events().len(), events_before);
                }
                prop_assert_eq!(self.pages.len(), len);
            }
            Op::Swap(a, b) => {
                let result = self.pages.swap(a, b);
                if a < len && b < len {
                    self.model.swap(a, b);
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(result.is_err());
                }
                prop_assert_eq!(self.pages.len(), len);
            }
            Op::RemoveAll => {
                self.model.clear();
                self.pages.remove_all();
                prop_assert_eq!(self.pages.len(), 0);
            }
        }
        Ok(())
    }

    fn check_sync(&self) -> Result<(), TestCaseError> {
        prop_assert_eq!(self.labels(), self.model.clone());
        prop_assert_eq!(self.root.borrow().children(), self.views());
        prop_assert!(self.pages.is_in_sync());
        Ok(())
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any script keeps the sequence, the model and the root in agreement
    #[test]
    fn prop_scripts_preserve_order(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut harness = Harness::new();
        for op in &ops {
            harness.apply(op)?;
            harness.check_sync()?;
        }
    }

    /// A valid move relocates exactly one page; the rest keep relative order
    #[test]
    fn prop_move_is_permutation(len in 1usize..10, to_seed in 0usize..100, from_seed in 0usize..100) {
        let mut harness = Harness::new();
        for _ in 0..len {
            harness.apply(&Op::Push)?;
        }
        let to = to_seed % len;
        let from = from_seed % len;
        let before = harness.labels();

        harness.pages.move_page(to, from).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let after = harness.labels();

        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort_unstable();
        sorted_after.sort_unstable();
        prop_assert_eq!(sorted_before, sorted_after);

        let moved = before[from];
        prop_assert_eq!(after[to], moved);
        let rest_before: Vec<u32> = before.iter().copied().filter(|label| *label != moved).collect();
        let rest_after: Vec<u32> = after.iter().copied().filter(|label| *label != moved).collect();
        prop_assert_eq!(rest_before, rest_after);
    }

    /// An oversized insert index behaves exactly like inserting at the end
    #[test]
    fn prop_insert_clamps(len in 0usize..8, extra in 0usize..1000, replace in any::<bool>()) {
        let mut clamped = Harness::new();
        let mut exact = Harness::new();
        for _ in 0..len {
            clamped.apply(&Op::Push)?;
            exact.apply(&Op::Push)?;
        }

        clamped.apply(&Op::Insert { index: len + extra, replace })?;
        exact.apply(&Op::Insert { index: len, replace })?;

        prop_assert_eq!(clamped.labels(), exact.labels());
        clamped.check_sync()?;
        exact.check_sync()?;
    }
}
