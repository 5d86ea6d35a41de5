//! Handler Registry
//!
//! Bookkeeping for counting listeners attached by element id. Every
//! registration keeps its `ListenerId`, so removal detaches exactly the
//! listeners this registry attached and nothing else.

use indexmap::IndexMap;
use wick_dom::{Document, ListenerId, NodeId};

use crate::counter::counting_listener;
use crate::StatusReporter;

/// One attached listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Element the listener was attached to
    pub node: NodeId,
    pub listener: ListenerId,
}

/// Event name -> attached listeners, in first-add order
#[derive(Debug, Clone, Default)]
pub struct EventMap {
    events: IndexMap<String, Vec<Registration>>,
}

impl EventMap {
    /// Listeners currently attached for `event_type`
    pub fn listeners(&self, event_type: &str) -> &[Registration] {
        self.events.get(event_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the event was ever added for this element
    pub fn contains_event(&self, event_type: &str) -> bool {
        self.events.contains_key(event_type)
    }

    /// True while at least one listener is attached
    pub fn is_active(&self, event_type: &str) -> bool {
        !self.listeners(event_type).is_empty()
    }

    /// Iterate `(event, listeners)` in insertion order
    pub fn events(&self) -> impl Iterator<Item = (&str, &[Registration])> {
        self.events.iter().map(|(name, regs)| (name.as_str(), regs.as_slice()))
    }

    /// Number of known events (active or emptied)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Element id -> `EventMap`
///
/// Entries and per-event lists are created on first add and afterwards only
/// ever emptied, so the status report can still show removed events.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    entries: IndexMap<String, EventMap>,
    status: Option<StatusReporter>,
}

impl HandlerRegistry {
    /// Registry that refreshes the default status element after changes
    pub fn new() -> Self {
        Self::with_status(StatusReporter::default())
    }

    /// Registry that refreshes the given status display after changes
    pub fn with_status(reporter: StatusReporter) -> Self {
        Self {
            entries: IndexMap::new(),
            status: Some(reporter),
        }
    }

    /// Registry that never touches a status display
    pub fn without_status() -> Self {
        Self {
            entries: IndexMap::new(),
            status: None,
        }
    }

    /// Status reporter used for automatic refreshes
    pub fn status_reporter(&self) -> Option<&StatusReporter> {
        self.status.as_ref()
    }

    /// Attach one counting listener per event name to `#element_id`.
    ///
    /// Duplicate names attach duplicate listeners; each increments the same
    /// counter, so N registrations of an event count N per firing. Does
    /// nothing when no element has that id.
    pub fn add_events_by_id<I, S>(&mut self, doc: &mut Document, element_id: &str, events: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(node) = doc.get_element_by_id(element_id) else { return };

        let mut added = 0usize;
        for event in events {
            let event = event.as_ref();
            let listener = doc.add_event_listener(node, event, counting_listener(event));
            self.entries
                .entry(element_id.to_string())
                .or_default()
                .events
                .entry(event.to_string())
                .or_default()
                .push(Registration { node, listener });
            added += 1;
        }

        if added > 0 {
            tracing::debug!("Added {} listener(s) to #{}", added, element_id);
            self.refresh_status(doc, element_id);
        }
    }

    /// Detach every registered listener for the given events on
    /// `#element_id` and empty their lists. Counters are left untouched.
    ///
    /// Unknown ids, unknown events and elements that left the document are
    /// ignored.
    pub fn remove_events_by_id<I, S>(&mut self, doc: &mut Document, element_id: &str, events: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if doc.get_element_by_id(element_id).is_none() {
            return;
        }
        let Some(entry) = self.entries.get_mut(element_id) else { return };

        let mut removed = 0usize;
        for event in events {
            let Some(registrations) = entry.events.get_mut(event.as_ref()) else { continue };
            for reg in registrations.drain(..) {
                if doc.remove_event_listener(reg.node, reg.listener) {
                    removed += 1;
                }
            }
        }

        tracing::debug!("Removed {} listener(s) from #{}", removed, element_id);
        self.refresh_status(doc, element_id);
    }

    fn refresh_status(&self, doc: &mut Document, element_id: &str) {
        if let Some(reporter) = &self.status {
            reporter.update_status(doc, self, element_id);
        }
    }

    /// Registry entry for an element id
    pub fn entry(&self, element_id: &str) -> Option<&EventMap> {
        self.entries.get(element_id)
    }

    pub fn contains(&self, element_id: &str) -> bool {
        self.entries.contains_key(element_id)
    }

    /// Listeners registered for `(element_id, event_type)`; 0 if unknown
    pub fn listener_count(&self, element_id: &str, event_type: &str) -> usize {
        self.entry(element_id).map_or(0, |e| e.listeners(event_type).len())
    }

    /// Element ids in first-add order
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
