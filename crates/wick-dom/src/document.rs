//! Document - High-level document API

use std::collections::HashMap;

use crate::events::ListenerTable;
use crate::{
    to_attribute_name, to_camel_case, DOMTokenList, DomError, DomTree, ElementData, Event,
    ListenerId, NodeId, ScrollOptions, ScrollState, Selector,
};

/// HTML Document
///
/// Owns the node arena, every registered listener and per-element scroll
/// state. Everything is single-threaded; listeners run synchronously inside
/// `dispatch_event` with mutable access to the document.
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    listeners: ListenerTable,
    scroll: HashMap<NodeId, ScrollState>,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty `<html><head/><body/></html>` skeleton
    pub fn new() -> Self {
        let mut doc = Self::empty();
        let html = doc.tree.create_element("html");
        let head = doc.tree.create_element("head");
        let body = doc.tree.create_element("body");

        doc.tree.append_child(NodeId::ROOT, html);
        doc.tree.append_child(html, head);
        doc.tree.append_child(html, body);
        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            listeners: ListenerTable::default(),
            scroll: HashMap::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Re-resolve cached `<html>`, `<head>` and `<body>` after tree building
    pub fn finalize(&mut self) {
        self.html_element = self.find_child_tag(NodeId::ROOT, "html").unwrap_or(NodeId::NONE);
        self.head_element = self.find_child_tag(self.html_element, "head").unwrap_or(NodeId::NONE);
        self.body_element = self.find_child_tag(self.html_element, "body").unwrap_or(NodeId::NONE);
    }

    fn find_child_tag(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.tag == tag))
            .map(|(id, _)| id)
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get `<head>` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Append `child` under `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    // --- lookup -----------------------------------------------------------

    /// Get a connected element by its `id` attribute (first in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.element(node).is_some_and(|e| e.id() == Some(id)))
    }

    /// First element in the document matching `selector`
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        self.query_selector_within(NodeId::ROOT, selector)
    }

    /// All elements in the document matching `selector`
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.query_selector_all_within(NodeId::ROOT, selector)
    }

    /// First descendant of `scope` matching `selector`
    pub fn query_selector_within(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.tree
            .descendants(scope)
            .into_iter()
            .find(|&node| selector.matches(&self.tree, node)))
    }

    /// All descendants of `scope` matching `selector`
    pub fn query_selector_all_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.tree
            .descendants(scope)
            .into_iter()
            .filter(|&node| selector.matches(&self.tree, node))
            .collect())
    }

    /// Inclusive descendant check (`Node.contains`)
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    // --- attributes -------------------------------------------------------

    /// Element data for a node
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.tree.get(node).and_then(|n| n.as_element())
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, DomError> {
        let n = self.tree.get_mut(node).ok_or(DomError::NodeNotFound(node))?;
        n.as_element_mut().ok_or(DomError::NotAnElement(node))
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.get_attr(name))
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_attr(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_mut(node)?.remove_attr(name))
    }

    // --- classList --------------------------------------------------------

    /// Parsed `class` attribute (empty for non-elements)
    pub fn class_list(&self, node: NodeId) -> DOMTokenList {
        DOMTokenList::parse(self.get_attribute(node, "class").unwrap_or(""))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.class_list(node).contains(class)
    }

    /// `classList.add`; returns true if the class was newly added
    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<bool, DomError> {
        self.update_classes(node, |list| list.add(class))
    }

    /// `classList.remove`; returns true if the class was present
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<bool, DomError> {
        self.update_classes(node, |list| list.remove(class))
    }

    /// `classList.toggle`; returns the new state
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> Result<bool, DomError> {
        self.update_classes(node, |list| list.toggle(class, force))
    }

    fn update_classes<R>(&mut self, node: NodeId, f: impl FnOnce(&mut DOMTokenList) -> R) -> Result<R, DomError> {
        let elem = self.element_mut(node)?;
        let mut list = DOMTokenList::parse(elem.get_attr("class").unwrap_or(""));
        let result = f(&mut list);
        elem.set_attr("class", &list.value());
        Ok(result)
    }

    // --- dataset ----------------------------------------------------------

    /// `element.dataset[key]`
    pub fn dataset_get(&self, node: NodeId, key: &str) -> Option<&str> {
        self.get_attribute(node, &to_attribute_name(key))
    }

    /// `element.dataset[key] = value`
    pub fn dataset_set(&mut self, node: NodeId, key: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute(node, &to_attribute_name(key), value)
    }

    /// `delete element.dataset[key]`
    pub fn dataset_remove(&mut self, node: NodeId, key: &str) -> Result<Option<String>, DomError> {
        self.remove_attribute(node, &to_attribute_name(key))
    }

    /// Dataset keys in attribute order
    pub fn dataset_keys(&self, node: NodeId) -> Vec<String> {
        self.element(node)
            .map(|e| {
                e.attrs.iter()
                    .filter_map(|a| a.name.strip_prefix("data-"))
                    .map(to_camel_case)
                    .collect()
            })
            .unwrap_or_default()
    }

    // --- text -------------------------------------------------------------

    /// `node.textContent`
    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        self.element_mut(node)?;
        self.tree.clear_children(node);
        if !text.is_empty() {
            let child = self.tree.create_text(text);
            self.tree.append_child(node, child);
        }
        Ok(())
    }

    // --- events -----------------------------------------------------------

    /// Attach a listener; the returned handle is the only way to detach it
    pub fn add_event_listener<F>(&mut self, node: NodeId, event_type: &str, listener: F) -> ListenerId
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        let id = self.listeners.add(node, event_type, std::rc::Rc::new(listener));
        tracing::trace!("addEventListener {:?} {} -> {:?}", node, event_type, id);
        id
    }

    /// Detach a listener by handle; false if it was not attached to `node`
    pub fn remove_event_listener(&mut self, node: NodeId, id: ListenerId) -> bool {
        let removed = self.listeners.remove(node, id);
        tracing::trace!("removeEventListener {:?} {:?} removed={}", node, id, removed);
        removed
    }

    /// Listeners currently attached to `node` for `event_type`
    pub fn listener_count(&self, node: NodeId, event_type: &str) -> usize {
        self.listeners.count(node, event_type)
    }

    /// Dispatch at `target`, bubbling to the document node if the event
    /// bubbles. Returns false if a listener called `prevent_default`.
    pub fn dispatch_event(&mut self, target: NodeId, mut event: Event) -> bool {
        if self.tree.get(target).is_none() {
            return true;
        }
        event.target = target;

        let mut path = vec![target];
        if event.bubbles {
            path.extend(self.tree.ancestors(target));
        }

        let mut invoked = 0usize;
        for node in path {
            event.current_target = node;
            for entry in self.listeners.snapshot(node, &event.event_type) {
                // Skip listeners removed by an earlier listener in this dispatch
                if !self.listeners.contains(node, entry.id) {
                    continue;
                }
                (entry.callback)(self, &mut event);
                invoked += 1;
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        tracing::trace!("dispatch {} at {:?}: {} listeners", event.event_type, target, invoked);
        !event.is_default_prevented()
    }

    /// `element.click()`
    pub fn click(&mut self, node: NodeId) -> bool {
        self.dispatch_event(node, Event::bubbling("click"))
    }

    // --- scrolling --------------------------------------------------------

    /// `element.scrollBy(options)`
    pub fn scroll_by(&mut self, node: NodeId, options: ScrollOptions) {
        if self.element(node).is_none() {
            return;
        }
        tracing::trace!("scrollBy {:?} {:?}", node, options);
        self.scroll.entry(node).or_default().scroll_by(options);
    }

    /// Scroll state of an element that has been scrolled at least once
    pub fn scroll_state(&self, node: NodeId) -> Option<&ScrollState> {
        self.scroll.get(&node)
    }

    /// Advance every smooth scroll; returns true if anything moved
    pub fn advance_scroll_animations(&mut self, delta_ms: f32) -> bool {
        self.scroll
            .values_mut()
            .fold(false, |moved, state| state.update(delta_ms) | moved)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
