//! UI Configuration

use wick_dom::ScrollBehavior;

/// Wording used by the status report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessages {
    /// Written when the element has no registry entry
    pub no_events: String,
    /// Header before `#element-id:`
    pub header: String,
    /// Unit after the firing count
    pub firings: String,
    /// Marker for events with attached listeners
    pub active: String,
    /// Marker for events whose listeners were removed
    pub removed: String,
}

impl StatusMessages {
    /// English wording (default)
    pub fn english() -> Self {
        Self {
            no_events: "No events added.".to_string(),
            header: "Statistics for".to_string(),
            firings: "firings".to_string(),
            active: "(active)".to_string(),
            removed: "(removed)".to_string(),
        }
    }

    /// Russian wording
    pub fn russian() -> Self {
        Self {
            no_events: "Нет добавленных событий.".to_string(),
            header: "Статистика для".to_string(),
            firings: "срабатываний".to_string(),
            active: "(активно)".to_string(),
            removed: "(удалено)".to_string(),
        }
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self::english()
    }
}

/// Status display options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Id of the element whose text receives the report
    pub status_element_id: String,
    pub messages: StatusMessages,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            status_element_id: "status".to_string(),
            messages: StatusMessages::default(),
        }
    }
}

/// Carousel wiring options
///
/// Selectors for items, arrows and the track are resolved inside the
/// wrapper element.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub item_selector: String,
    pub left_arrow_selector: String,
    pub right_arrow_selector: String,
    /// Scrollable element the arrows move
    pub track_selector: String,
    /// Class whose presence hides the modal
    pub hidden_class: String,
    /// Dataset key holding an item's id (`data-id`)
    pub item_id_key: String,
    /// Dataset key the modal records the selected id under (`data-item-id`)
    pub modal_item_key: String,
    /// Horizontal distance per arrow click
    pub scroll_step: f32,
    pub scroll_behavior: ScrollBehavior,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_selector: ".item".to_string(),
            left_arrow_selector: ".arrow.left".to_string(),
            right_arrow_selector: ".arrow.right".to_string(),
            track_selector: ".carousel".to_string(),
            hidden_class: "hidden".to_string(),
            item_id_key: "id".to_string(),
            modal_item_key: "itemId".to_string(),
            scroll_step: 200.0,
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}
