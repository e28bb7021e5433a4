//! Page order scenarios across the view and collection crates
//!
//! A renderer and an editor share one view root. The editor reorders pages
//! through the collection only; the renderer reads the root to draw.
//!
//! ## Scenarios
//!
//! 1. **Reorder**: `[A, B, C]`, move 2 → 0, renderer sees `[C, A, B]`
//! 2. **Replace**: `[A, B]`, replace 1 with X, B's node is gone
//! 3. **First page**: empty root, push A, A is the root's only child
//! 4. **Wire shape**: move notifications serialize as the host expects

use core_types::NodeId;
use page_collection::{EventLog, Page, PageCollection, PageEvent};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use view_types::{MemoryViewRoot, PageClassNames, ViewRoot};

/// Stand-in renderer: knows each node's text, reads order from the root
struct Renderer {
    root: Rc<RefCell<MemoryViewRoot>>,
    texts: HashMap<NodeId, String>,
}

impl Renderer {
    fn new(root: Rc<RefCell<MemoryViewRoot>>) -> Self {
        Self {
            root,
            texts: HashMap::new(),
        }
    }

    /// Builds content and node together, the way a page is created
    fn build_page(&mut self, text: &str) -> Page<String> {
        let node = NodeId::new();
        self.texts.insert(node, text.to_string());
        Page::new(node, text.to_string())
    }

    fn draw(&self) -> Vec<String> {
        let class = self.root.borrow().class_names().wrapper.clone();
        self.root
            .borrow()
            .children()
            .iter()
            .map(|node| format!("{}:{}", class, self.texts[node]))
            .collect()
    }
}

fn setup() -> (
    PageCollection<String, Rc<RefCell<MemoryViewRoot>>>,
    Renderer,
    Rc<RefCell<EventLog>>,
) {
    let root = Rc::new(RefCell::new(MemoryViewRoot::new()));
    let log = Rc::new(RefCell::new(EventLog::new()));
    let pages = PageCollection::new(Rc::clone(&root)).with_event_sink(Rc::clone(&log));
    (pages, Renderer::new(root), log)
}

#[test]
fn test_reorder_is_visible_to_renderer() {
    let (mut pages, mut renderer, log) = setup();
    for text in ["A", "B", "C"] {
        let page = renderer.build_page(text);
        pages.push(page).expect("push should succeed");
    }

    let event = pages.move_page(0, 2).expect("move should succeed");

    assert_eq!(renderer.draw(), vec!["ce-page:C", "ce-page:A", "ce-page:B"]);
    assert_eq!(
        event,
        PageEvent::Move {
            from_index: 2,
            to_index: 0
        }
    );
    assert_eq!(log.borrow().events(), &[event]);
}

#[test]
fn test_replace_detaches_old_node() {
    let (mut pages, mut renderer, log) = setup();
    let a = renderer.build_page("A");
    let b = renderer.build_page("B");
    let b_view = b.view();
    pages.push(a).unwrap();
    pages.push(b).unwrap();

    let x = renderer.build_page("X");
    let old = pages
        .insert(1, x, true)
        .expect("replace should succeed")
        .expect("a page should be replaced");

    assert_eq!(old.into_content(), "B");
    assert_eq!(renderer.draw(), vec!["ce-page:A", "ce-page:X"]);
    assert!(!renderer.root.borrow().contains(b_view));
    assert!(log.borrow().events().is_empty());
}

#[test]
fn test_first_page_goes_straight_under_root() {
    let (mut pages, mut renderer, _log) = setup();
    let a = renderer.build_page("A");
    let view = a.view();

    pages.push(a).unwrap();

    assert_eq!(renderer.root.borrow().as_slice(), &[view]);
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_renderer_class_names_from_config() {
    let names: PageClassNames =
        serde_json::from_str(r#"{"wrapper":"doc-page"}"#).expect("config should parse");
    let root = Rc::new(RefCell::new(MemoryViewRoot::with_class_names(names)));
    let mut renderer = Renderer::new(Rc::clone(&root));
    let mut pages = PageCollection::new(root);

    let page = renderer.build_page("A");
    pages.push(page).unwrap();

    assert_eq!(renderer.draw(), vec!["doc-page:A"]);
}

#[test]
fn test_mixed_editing_session() {
    let (mut pages, mut renderer, log) = setup();
    for text in ["intro", "body", "outro"] {
        let page = renderer.build_page(text);
        pages.push(page).unwrap();
    }

    let cover = renderer.build_page("cover");
    pages.insert(0, cover, false).unwrap();
    pages.move_page(3, 1).unwrap();
    pages.remove(Some(1)).unwrap();
    let appendix = renderer.build_page("appendix");
    pages.set(100, appendix).unwrap();

    assert_eq!(
        renderer.draw(),
        vec!["ce-page:cover", "ce-page:outro", "ce-page:intro", "ce-page:appendix"]
    );
    assert!(pages.is_in_sync());
    assert_eq!(log.borrow().events(), &[PageEvent::moved(1, 3)]);

    pages.remove_all();
    pages.remove_all();
    assert!(renderer.draw().is_empty());
}

#[test]
fn test_move_notification_wire_shape() {
    let (mut pages, mut renderer, log) = setup();
    for text in ["A", "B"] {
        let page = renderer.build_page(text);
        pages.push(page).unwrap();
    }

    pages.move_page(1, 0).unwrap();

    let json = serde_json::to_string(&log.borrow().events()).unwrap();
    assert_eq!(json, r#"[{"type":"move","fromIndex":0,"toIndex":1}]"#);
}
