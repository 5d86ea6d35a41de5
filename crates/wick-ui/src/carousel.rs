//! Carousel / Modal Controller
//!
//! Wires static click listeners onto an existing carousel structure:
//!
//! ```text
//! .carousel-wrapper
//!   .arrow.left   .carousel > .item[data-id]*   .arrow.right
//! #modal.modal.hidden
//! ```
//!
//! The modal has two states. Clicking an item shows it with that item's id;
//! clicking anywhere outside both the modal and the wrapper hides it again.
//! All state lives in the DOM (`hidden` class, `data-item-id`).

use wick_dom::{Document, DomError, ListenerId, NodeId, ScrollOptions};

use crate::CarouselConfig;

/// Modal state as read from the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    /// Shown, with the recorded item id (if the clicked item had one)
    Shown(Option<String>),
}

/// Handles to a wired carousel
#[derive(Debug)]
pub struct Carousel {
    wrapper: NodeId,
    modal: NodeId,
    track: Option<NodeId>,
    items: Vec<NodeId>,
    bindings: Vec<(NodeId, ListenerId)>,
    hidden_class: String,
    modal_item_key: String,
}

/// Wire a carousel found by `wrapper_selector` to the modal found by
/// `modal_selector`.
///
/// Returns `None` without touching the document when either selector
/// matches nothing or does not parse. Parts missing inside the wrapper
/// (arrows, track, items) are skipped.
pub fn setup_carousel(
    doc: &mut Document,
    wrapper_selector: &str,
    modal_selector: &str,
    config: &CarouselConfig,
) -> Option<Carousel> {
    let wrapper = doc.query_selector(wrapper_selector).ok().flatten()?;
    let modal = doc.query_selector(modal_selector).ok().flatten()?;

    let track = doc.query_selector_within(wrapper, &config.track_selector).ok().flatten();
    let items = doc
        .query_selector_all_within(wrapper, &config.item_selector)
        .unwrap_or_default();

    let mut bindings = Vec::new();

    for &item in &items {
        let hidden = config.hidden_class.clone();
        let source_key = config.item_id_key.clone();
        let target_key = config.modal_item_key.clone();
        let id = doc.add_event_listener(item, "click", move |doc, _| {
            let item_id = doc.dataset_get(item, &source_key).map(str::to_owned);
            if let Err(err) = show_modal(doc, modal, &hidden, &target_key, item_id.as_deref()) {
                tracing::warn!("Failed to show modal: {}", err);
            }
        });
        bindings.push((item, id));
    }

    if let Some(track) = track {
        let arrows = [
            (&config.left_arrow_selector, -config.scroll_step),
            (&config.right_arrow_selector, config.scroll_step),
        ];
        for (selector, offset) in arrows {
            let Some(arrow) = doc.query_selector_within(wrapper, selector).ok().flatten() else { continue };
            let behavior = config.scroll_behavior;
            let id = doc.add_event_listener(arrow, "click", move |doc, _| {
                doc.scroll_by(track, ScrollOptions::horizontal(offset, behavior));
            });
            bindings.push((arrow, id));
        }
    }

    let hidden = config.hidden_class.clone();
    let target_key = config.modal_item_key.clone();
    let id = doc.add_event_listener(NodeId::ROOT, "click", move |doc, event| {
        if doc.contains(modal, event.target) || doc.contains(wrapper, event.target) {
            return;
        }
        if let Err(err) = hide_modal(doc, modal, &hidden, &target_key) {
            tracing::warn!("Failed to hide modal: {}", err);
        }
    });
    bindings.push((NodeId::ROOT, id));

    tracing::debug!(
        "Carousel wired: {} items, track={}, {} listeners",
        items.len(),
        track.is_some(),
        bindings.len()
    );

    Some(Carousel {
        wrapper,
        modal,
        track,
        items,
        bindings,
        hidden_class: config.hidden_class.clone(),
        modal_item_key: config.modal_item_key.clone(),
    })
}

fn show_modal(
    doc: &mut Document,
    modal: NodeId,
    hidden_class: &str,
    key: &str,
    item_id: Option<&str>,
) -> Result<(), DomError> {
    doc.remove_class(modal, hidden_class)?;
    match item_id {
        Some(id) => doc.dataset_set(modal, key, id)?,
        None => {
            doc.dataset_remove(modal, key)?;
        }
    }
    Ok(())
}

fn hide_modal(doc: &mut Document, modal: NodeId, hidden_class: &str, key: &str) -> Result<(), DomError> {
    doc.add_class(modal, hidden_class)?;
    doc.dataset_remove(modal, key)?;
    Ok(())
}

impl Carousel {
    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    pub fn modal(&self) -> NodeId {
        self.modal
    }

    /// Scrollable track, if the wrapper has one
    pub fn track(&self) -> Option<NodeId> {
        self.track
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Current modal state
    pub fn modal_state(&self, doc: &Document) -> ModalState {
        if doc.has_class(self.modal, &self.hidden_class) {
            ModalState::Hidden
        } else {
            ModalState::Shown(doc.dataset_get(self.modal, &self.modal_item_key).map(str::to_owned))
        }
    }

    /// Detach every listener this carousel attached
    pub fn teardown(self, doc: &mut Document) {
        let count = self.bindings.len();
        for (node, id) in self.bindings {
            doc.remove_event_listener(node, id);
        }
        tracing::debug!("Carousel torn down: {} listeners removed", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// wrapper > (left, track > item, right), modal
    fn page() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let el = |doc: &mut Document, parent: NodeId, class: &str| {
            let node = doc.create_element("div");
            doc.set_attribute(node, "class", class).unwrap();
            doc.append_child(parent, node);
            node
        };
        let wrapper = el(&mut doc, body, "carousel-wrapper");
        el(&mut doc, wrapper, "arrow left");
        let track = el(&mut doc, wrapper, "carousel");
        let item = el(&mut doc, track, "item");
        doc.set_attribute(item, "data-id", "7").unwrap();
        el(&mut doc, wrapper, "arrow right");
        let modal = el(&mut doc, body, "modal hidden");
        doc.set_attribute(modal, "id", "modal").unwrap();
        (doc, track, item, modal)
    }

    #[test]
    fn test_missing_targets_return_none() {
        let (mut doc, ..) = page();
        let config = CarouselConfig::default();

        assert!(setup_carousel(&mut doc, ".non-existent", "#modal", &config).is_none());
        assert!(setup_carousel(&mut doc, ".carousel-wrapper", "#non-existent", &config).is_none());
        assert!(setup_carousel(&mut doc, "[[", "#modal", &config).is_none());
        assert_eq!(doc.listener_count(NodeId::ROOT, "click"), 0);
    }

    #[test]
    fn test_item_click_shows_modal() {
        let (mut doc, _, item, _) = page();
        let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default()).unwrap();

        assert_eq!(carousel.modal_state(&doc), ModalState::Hidden);
        doc.click(item);
        assert_eq!(carousel.modal_state(&doc), ModalState::Shown(Some("7".to_string())));
    }

    #[test]
    fn test_item_without_id_clears_recorded_id() {
        let (mut doc, _, item, modal) = page();
        doc.remove_attribute(item, "data-id").unwrap();
        doc.set_attribute(modal, "data-item-id", "stale").unwrap();
        let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default()).unwrap();

        doc.click(item);
        assert_eq!(carousel.modal_state(&doc), ModalState::Shown(None));
    }

    #[test]
    fn test_custom_step() {
        let (mut doc, track, ..) = page();
        let config = CarouselConfig { scroll_step: 50.0, ..CarouselConfig::default() };
        setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &config).unwrap();

        let right = doc.query_selector(".arrow.right").unwrap().unwrap();
        doc.click(right);
        let request = &doc.scroll_state(track).unwrap().requests()[0];
        assert_eq!(request.left, Some(50.0));
    }

    #[test]
    fn test_teardown_detaches_everything() {
        let (mut doc, track, item, modal) = page();
        let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default()).unwrap();
        assert_eq!(carousel.items(), &[item]);
        assert_eq!(carousel.track(), Some(track));

        carousel.teardown(&mut doc);
        doc.click(item);
        assert!(doc.has_class(modal, "hidden"));
        assert_eq!(doc.listener_count(NodeId::ROOT, "click"), 0);
    }
}
