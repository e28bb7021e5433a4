//! # Page Collection
//!
//! An ordered sequence of pages kept in positional lockstep with a view root.
//!
//! ## Philosophy
//!
//! - **Two structures, one order**: Every mutation updates the sequence and
//!   the view root together; `array()[i]`'s node is always the `i`-th of the
//!   collection's nodes under the root.
//! - **Anchor-relative**: Nodes are placed next to a neighbour (or appended),
//!   never at an absolute index.
//! - **Explicit failures**: Out-of-range indices are errors, not silent no-ops.
//! - **Content is opaque**: The collection moves pages; it never looks inside.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A content renderer
//! - An event bus (one sink, fire-and-forget)
//! - The editor command surface (save/render/focus)
//!
//! ## Example
//!
//! ```
//! use core_types::NodeId;
//! use page_collection::{Page, PageCollection};
//! use view_types::{MemoryViewRoot, ViewRoot};
//!
//! let mut pages = PageCollection::new(MemoryViewRoot::new());
//! pages.push(Page::new(NodeId::new(), "A")).unwrap();
//! pages.push(Page::new(NodeId::new(), "B")).unwrap();
//! pages.push(Page::new(NodeId::new(), "C")).unwrap();
//!
//! pages.move_page(0, 2).unwrap();
//!
//! let order: Vec<&str> = pages.iter().map(|page| *page.content()).collect();
//! assert_eq!(order, ["C", "A", "B"]);
//! assert_eq!(pages.view_root().children()[0], pages[0].view());
//! ```

pub mod collection;
pub mod error;
pub mod event;
pub mod page;
pub mod snapshot;
pub mod sync;

pub use collection::PageCollection;
pub use error::PageError;
pub use event::{EventLog, PageEvent, PageEventSink};
pub use page::Page;
pub use snapshot::CollectionSnapshot;
pub use sync::Placement;
