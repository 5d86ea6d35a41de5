//! DOM Events
//!
//! Named events, listener handles and per-node listener storage.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{Document, NodeId};

/// Listener callback
///
/// Listeners get the document mutably so they can touch attributes, classes
/// and other listeners while the event is being dispatched.
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// Handle returned by `Document::add_event_listener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// Event being dispatched
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
    pub current_target: NodeId,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Non-bubbling event (`new Event(type)`)
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            target: NodeId::NONE,
            current_target: NodeId::NONE,
            bubbles: false,
            cancelable: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Bubbling, cancelable event (what `element.click()` synthesizes)
    pub fn bubbling(event_type: &str) -> Self {
        Self {
            bubbles: true,
            cancelable: true,
            ..Self::new(event_type)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation to further nodes
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Registered listener
#[derive(Clone)]
pub(crate) struct ListenerEntry {
    pub id: ListenerId,
    pub event_type: String,
    pub callback: Listener,
}

impl fmt::Debug for ListenerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("id", &self.id)
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

/// Listeners by node, in registration order
#[derive(Debug, Default)]
pub(crate) struct ListenerTable {
    by_node: HashMap<NodeId, Vec<ListenerEntry>>,
    next_id: u64,
}

impl ListenerTable {
    pub fn add(&mut self, node: NodeId, event_type: &str, callback: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.by_node.entry(node).or_default().push(ListenerEntry {
            id,
            event_type: event_type.to_string(),
            callback,
        });
        id
    }

    /// Remove by handle; false if the handle is not on that node
    pub fn remove(&mut self, node: NodeId, id: ListenerId) -> bool {
        let Some(entries) = self.by_node.get_mut(&node) else { return false };
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.by_node.remove(&node);
        }
        removed
    }

    pub fn contains(&self, node: NodeId, id: ListenerId) -> bool {
        self.by_node
            .get(&node)
            .is_some_and(|entries| entries.iter().any(|e| e.id == id))
    }

    /// Snapshot of listeners for one event on one node
    pub fn snapshot(&self, node: NodeId, event_type: &str) -> Vec<ListenerEntry> {
        self.by_node
            .get(&node)
            .map(|entries| {
                entries.iter()
                    .filter(|e| e.event_type == event_type)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, node: NodeId, event_type: &str) -> usize {
        self.by_node
            .get(&node)
            .map_or(0, |entries| entries.iter().filter(|e| e.event_type == event_type).count())
    }
}
