//! Structured page events and the sinks that receive them
//!
//! Delivery is fire-and-forget: the collection hands each event to at most
//! one sink and does not care what happens next.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Event composed by a structural operation
///
/// Serializes as `{"type":"move","fromIndex":2,"toIndex":0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageEvent {
    /// A page was relocated
    #[serde(rename_all = "camelCase")]
    Move { from_index: usize, to_index: usize },
}

impl PageEvent {
    /// Composes a move event
    pub fn moved(from_index: usize, to_index: usize) -> Self {
        PageEvent::Move {
            from_index,
            to_index,
        }
    }

    /// Returns the event type name
    pub fn kind(&self) -> &'static str {
        match self {
            PageEvent::Move { .. } => "move",
        }
    }
}

/// Receiver for page events
pub trait PageEventSink {
    fn emit(&mut self, event: &PageEvent);
}

/// Any `FnMut(&PageEvent)` closure is a sink
impl<F: FnMut(&PageEvent)> PageEventSink for F {
    fn emit(&mut self, event: &PageEvent) {
        self(event)
    }
}

/// Shared sink, so the emitter and an observer can both hold it
impl<S: PageEventSink> PageEventSink for Rc<RefCell<S>> {
    fn emit(&mut self, event: &PageEvent) {
        self.borrow_mut().emit(event)
    }
}

/// Sink that records every event in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PageEvent>,
}

impl EventLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first
    pub fn events(&self) -> &[PageEvent] {
        &self.events
    }

    /// Returns the most recent event
    pub fn last(&self) -> Option<&PageEvent> {
        self.events.last()
    }

    /// Drops all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PageEventSink for EventLog {
    fn emit(&mut self, event: &PageEvent) {
        self.events.push(*event);
    }
}
