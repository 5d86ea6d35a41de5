//! Status Reporter
//!
//! Renders the registry entry of one element as text and writes it into the
//! status element.

use std::fmt::Write as _;

use wick_dom::Document;

use crate::counter::read_counter;
use crate::{HandlerRegistry, StatusConfig, StatusMessages};

#[derive(Debug, Clone, Default)]
pub struct StatusReporter {
    config: StatusConfig,
}

impl StatusReporter {
    pub fn new(config: StatusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Report text for `element_id`
    pub fn render(&self, doc: &Document, registry: &HandlerRegistry, element_id: &str) -> String {
        let messages: &StatusMessages = &self.config.messages;
        let Some(entry) = registry.entry(element_id) else {
            return messages.no_events.clone();
        };

        let node = doc.get_element_by_id(element_id);
        let mut text = format!("{} #{}:\n", messages.header, element_id);
        for (event, listeners) in entry.events() {
            let count = node.map_or(0, |n| read_counter(doc, n, event));
            let marker = if listeners.is_empty() { &messages.removed } else { &messages.active };
            let _ = writeln!(text, "• {}: {} {} {}", event, count, messages.firings, marker);
        }
        text
    }

    /// Write the report for `element_id` into the status element, if present
    pub fn update_status(&self, doc: &mut Document, registry: &HandlerRegistry, element_id: &str) {
        let Some(status) = doc.get_element_by_id(&self.config.status_element_id) else { return };

        let text = self.render(doc, registry, element_id);
        if doc.set_text_content(status, &text).is_ok() {
            tracing::debug!("Status updated for #{}", element_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Document {
        let mut doc = Document::new();
        let body = doc.body();
        for id in ["target-btn", "status"] {
            let el = doc.create_element("div");
            doc.set_attribute(el, "id", id).unwrap();
            doc.append_child(body, el);
        }
        doc
    }

    #[test]
    fn test_no_entry_message() {
        let doc = page();
        let registry = HandlerRegistry::without_status();
        let reporter = StatusReporter::default();

        assert_eq!(reporter.render(&doc, &registry, "target-btn"), "No events added.");
    }

    #[test]
    fn test_render_lines() {
        let mut doc = page();
        let mut registry = HandlerRegistry::without_status();
        registry.add_events_by_id(&mut doc, "target-btn", ["click", "mouseover"]);
        let btn = doc.get_element_by_id("target-btn").unwrap();
        doc.click(btn);
        doc.click(btn);
        registry.remove_events_by_id(&mut doc, "target-btn", ["mouseover"]);

        let text = StatusReporter::default().render(&doc, &registry, "target-btn");
        assert_eq!(
            text,
            "Statistics for #target-btn:\n• click: 2 firings (active)\n• mouseover: 0 firings (removed)\n"
        );
    }

    #[test]
    fn test_update_writes_status_element() {
        let mut doc = page();
        let registry = HandlerRegistry::without_status();
        let reporter = StatusReporter::new(StatusConfig {
            messages: StatusMessages::russian(),
            ..StatusConfig::default()
        });

        reporter.update_status(&mut doc, &registry, "target-btn");

        let status = doc.get_element_by_id("status").unwrap();
        assert_eq!(doc.text_content(status), "Нет добавленных событий.");
    }

    #[test]
    fn test_missing_status_element_is_noop() {
        let mut doc = Document::new();
        let registry = HandlerRegistry::without_status();
        StatusReporter::default().update_status(&mut doc, &registry, "target-btn");
        assert!(doc.get_element_by_id("status").is_none());
    }
}
