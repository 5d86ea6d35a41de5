//! Edge case tests for wick-dom
//!
//! Lookup, dispatch and mutation corner cases on hand-built trees.

use std::cell::RefCell;
use std::rc::Rc;

use wick_dom::{Document, DomError, Event, NodeId};

fn build() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let outer = doc.create_element("section");
    doc.set_attribute(outer, "class", "outer").unwrap();
    let inner = doc.create_element("span");
    doc.set_attribute(inner, "id", "inner").unwrap();
    doc.append_child(body, outer);
    doc.append_child(outer, inner);
    (doc, outer, inner)
}

#[test]
fn test_duplicate_ids_return_first_in_document_order() {
    let (mut doc, outer, inner) = build();
    let second = doc.create_element("span");
    doc.set_attribute(second, "id", "inner").unwrap();
    doc.append_child(outer, second);

    assert_eq!(doc.get_element_by_id("inner"), Some(inner));
}

#[test]
fn test_query_selector_all_in_order() {
    let (mut doc, outer, inner) = build();
    let extra = doc.create_element("span");
    doc.append_child(outer, extra);

    assert_eq!(doc.query_selector_all(".outer span").unwrap(), vec![inner, extra]);
    assert_eq!(doc.query_selector_within(inner, "span").unwrap(), None);
}

#[test]
fn test_invalid_selector_is_error() {
    let (doc, ..) = build();
    let err = doc.query_selector("span[").unwrap_err();
    assert!(matches!(err, DomError::InvalidSelector { .. }));
    assert!(err.to_string().contains("span["));
}

#[test]
fn test_attribute_ops_on_missing_node() {
    let (mut doc, ..) = build();
    let ghost = NodeId::NONE;

    assert!(matches!(doc.set_attribute(ghost, "a", "b"), Err(DomError::NodeNotFound(_))));
    assert_eq!(doc.get_attribute(ghost, "a"), None);
    assert!(!doc.has_class(ghost, "x"));
}

#[test]
fn test_dispatch_on_missing_node_is_noop() {
    let (mut doc, ..) = build();
    assert!(doc.dispatch_event(NodeId::NONE, Event::bubbling("click")));
}

#[test]
fn test_listener_order_along_path() {
    let (mut doc, outer, inner) = build();
    let order = Rc::new(RefCell::new(Vec::new()));

    for (node, tag) in [(outer, "outer"), (inner, "inner-1"), (inner, "inner-2"), (NodeId::ROOT, "doc")] {
        let log = order.clone();
        doc.add_event_listener(node, "click", move |_, _| log.borrow_mut().push(tag));
    }

    doc.click(inner);
    assert_eq!(*order.borrow(), vec!["inner-1", "inner-2", "outer", "doc"]);
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_event() {
    let (mut doc, _, inner) = build();
    let hits = Rc::new(RefCell::new(0));

    let counter = hits.clone();
    doc.add_event_listener(inner, "click", move |doc, e| {
        let counter = counter.clone();
        doc.add_event_listener(e.current_target, "click", move |_, _| *counter.borrow_mut() += 1);
    });

    doc.click(inner);
    assert_eq!(*hits.borrow(), 0);
    doc.click(inner);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn test_target_is_dispatch_node() {
    let (mut doc, outer, inner) = build();
    let seen = Rc::new(RefCell::new(None));

    let slot = seen.clone();
    doc.add_event_listener(outer, "click", move |_, e| *slot.borrow_mut() = Some((e.target, e.current_target)));

    doc.click(inner);
    assert_eq!(*seen.borrow(), Some((inner, outer)));
}

#[test]
fn test_detached_subtree_does_not_bubble_to_document() {
    let (mut doc, outer, inner) = build();
    let reached = Rc::new(RefCell::new(false));

    let flag = reached.clone();
    doc.add_event_listener(NodeId::ROOT, "click", move |_, _| *flag.borrow_mut() = true);
    doc.tree_mut().detach(outer);

    doc.click(inner);
    assert!(!*reached.borrow());
}
