//! Carousel and modal behaviour on the demo page markup

use wick_dom::{Document, Event, NodeId, ScrollBehavior};
use wick_ui::{setup_carousel, Carousel, CarouselConfig, ModalState};

const PAGE: &str = r#"
    <div class="carousel-wrapper">
      <div class="carousel-container">
        <button class="arrow left">&lt;</button>
        <div class="carousel">
          <div class="item" data-id="1">Item 1</div>
          <div class="item" data-id="2">Item 2</div>
          <div class="item" data-id="3">Item 3</div>
        </div>
        <button class="arrow right">&gt;</button>
      </div>
    </div>
    <div id="modal" class="modal hidden">Modal</div>
"#;

fn page() -> (Document, Carousel) {
    let mut doc = wick_html::parse(PAGE);
    let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default())
        .expect("carousel wired");
    (doc, carousel)
}

fn find(doc: &Document, selector: &str) -> NodeId {
    doc.query_selector(selector).unwrap().unwrap()
}

#[test]
fn test_item_click_opens_modal() {
    let (mut doc, _) = page();
    let modal = doc.get_element_by_id("modal").unwrap();
    let item = find(&doc, r#".item[data-id="1"]"#);

    assert!(doc.has_class(modal, "hidden"));
    doc.click(item);
    assert!(!doc.has_class(modal, "hidden"));
}

#[test]
fn test_item_click_records_id() {
    let (mut doc, carousel) = page();
    let modal = doc.get_element_by_id("modal").unwrap();

    doc.click(find(&doc, r#".item[data-id="2"]"#));

    assert_eq!(doc.dataset_get(modal, "itemId"), Some("2"));
    assert_eq!(carousel.modal_state(&doc), ModalState::Shown(Some("2".to_string())));
}

#[test]
fn test_left_arrow_scrolls_left() {
    let (mut doc, _) = page();
    let track = find(&doc, ".carousel");

    doc.click(find(&doc, ".arrow.left"));

    let requests = doc.scroll_state(track).expect("scroll requested").requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].left, Some(-200.0));
    assert_eq!(requests[0].behavior, ScrollBehavior::Smooth);
}

#[test]
fn test_right_arrow_scrolls_right() {
    let (mut doc, _) = page();
    let track = find(&doc, ".carousel");

    doc.click(find(&doc, ".arrow.right"));

    let requests = doc.scroll_state(track).expect("scroll requested").requests();
    assert_eq!(requests[0].left, Some(200.0));
    assert_eq!(requests[0].behavior, ScrollBehavior::Smooth);

    while doc.advance_scroll_animations(16.0) {}
    assert_eq!(doc.scroll_state(track).unwrap().position().x, 200.0);
}

#[test]
fn test_arrow_click_keeps_modal_open() {
    let (mut doc, carousel) = page();
    doc.click(find(&doc, r#".item[data-id="3"]"#));
    doc.click(find(&doc, ".arrow.right"));

    assert_eq!(carousel.modal_state(&doc), ModalState::Shown(Some("3".to_string())));
}

#[test]
fn test_outside_click_closes_modal() {
    let (mut doc, carousel) = page();
    let modal = doc.get_element_by_id("modal").unwrap();

    doc.click(find(&doc, r#".item[data-id="1"]"#));
    assert!(!doc.has_class(modal, "hidden"));

    let body = doc.body();
    doc.dispatch_event(body, Event::bubbling("click"));

    assert!(doc.has_class(modal, "hidden"));
    assert_eq!(doc.dataset_get(modal, "itemId"), None);
    assert_eq!(carousel.modal_state(&doc), ModalState::Hidden);
}

#[test]
fn test_non_bubbling_click_does_not_reach_document() {
    let (mut doc, carousel) = page();
    doc.click(find(&doc, r#".item[data-id="1"]"#));

    let body = doc.body();
    doc.dispatch_event(body, Event::new("click"));

    assert_eq!(carousel.modal_state(&doc), ModalState::Shown(Some("1".to_string())));
}

#[test]
fn test_inside_modal_click_keeps_it_open() {
    let (mut doc, _) = page();
    let modal = doc.get_element_by_id("modal").unwrap();

    doc.click(find(&doc, r#".item[data-id="1"]"#));
    doc.click(modal);

    assert!(!doc.has_class(modal, "hidden"));
}

#[test]
fn test_other_item_click_switches_id() {
    let (mut doc, _) = page();
    let modal = doc.get_element_by_id("modal").unwrap();

    doc.click(find(&doc, r#".item[data-id="1"]"#));
    assert!(!doc.has_class(modal, "hidden"));
    assert_eq!(doc.dataset_get(modal, "itemId"), Some("1"));

    doc.click(find(&doc, r#".item[data-id="2"]"#));
    assert!(!doc.has_class(modal, "hidden"));
    assert_eq!(doc.dataset_get(modal, "itemId"), Some("2"));
}

#[test]
fn test_missing_selectors_do_not_panic() {
    let mut doc = wick_html::parse(PAGE);
    let config = CarouselConfig::default();

    assert!(setup_carousel(&mut doc, ".non-existent", "#non-existent", &config).is_none());
    assert_eq!(doc.listener_count(NodeId::ROOT, "click"), 0);
}

#[test]
fn test_wrapper_without_track_still_handles_items() {
    let mut doc = wick_html::parse(
        r#"<div class="carousel-wrapper"><div class="item" data-id="9"></div><button class="arrow left"></button></div>
           <div id="modal" class="modal hidden"></div>"#,
    );
    let carousel = setup_carousel(&mut doc, ".carousel-wrapper", "#modal", &CarouselConfig::default()).unwrap();
    assert_eq!(carousel.track(), None);

    let left = find(&doc, ".arrow.left");
    assert_eq!(doc.listener_count(left, "click"), 0);

    doc.click(find(&doc, ".item"));
    assert_eq!(carousel.modal_state(&doc), ModalState::Shown(Some("9".to_string())));
}
