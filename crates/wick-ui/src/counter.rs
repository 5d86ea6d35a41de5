//! Interaction counters
//!
//! One counter per (element, event) stored in the element's dataset under
//! the event name, so `click` lives in `data-click`. Counters only grow.

use wick_dom::{Document, Event, NodeId};

/// Current count; absent or unparsable values read as 0
pub fn read_counter(doc: &Document, node: NodeId, event_type: &str) -> u64 {
    doc.dataset_get(node, event_type)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Increment and return the new count (1 when absent or unparsable)
pub fn increment_counter(doc: &mut Document, node: NodeId, event_type: &str) -> u64 {
    let next = read_counter(doc, node, event_type).saturating_add(1);
    if doc.dataset_set(node, event_type, &next.to_string()).is_err() {
        return 0;
    }
    next
}

/// Listener that bumps the counter of the element it is attached to
pub(crate) fn counting_listener(event_type: &str) -> impl Fn(&mut Document, &mut Event) + 'static {
    let event_type = event_type.to_string();
    move |doc, event| {
        let count = increment_counter(doc, event.current_target, &event_type);
        tracing::trace!("{} on {:?} -> {}", event_type, event.current_target, count);
    }
}
