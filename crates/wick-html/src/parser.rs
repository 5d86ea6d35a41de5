//! HTML5 Parser implementation
//!
//! Parses into html5ever's RcDom and copies the result into the wick arena.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use wick_dom::{Document, DomError, DomTree, NodeId};

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser {
    /// Keep text nodes that only contain whitespace
    pub keep_whitespace: bool,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_rc(&self, html: &str) -> RcDom {
        parse_document(RcDom::default(), Default::default()).one(html)
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        let dom = self.parse_rc(html);

        let mut document = Document::empty();
        for child in dom.document.children.borrow().iter() {
            self.convert_node(child, document.tree_mut(), NodeId::ROOT);
        }
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Replace the children of `target` with the body content of `html`
    pub fn set_inner_html(&self, doc: &mut Document, target: NodeId, html: &str) -> Result<(), DomError> {
        if doc.tree().get(target).is_none() {
            return Err(DomError::NodeNotFound(target));
        }
        if doc.element(target).is_none() {
            return Err(DomError::NotAnElement(target));
        }

        let dom = self.parse_rc(html);
        doc.tree_mut().clear_children(target);

        let body = find_child(&dom.document, "html").and_then(|html| find_child(&html, "body"));
        if let Some(body) = body {
            for child in body.children.borrow().iter() {
                self.convert_node(child, doc.tree_mut(), target);
            }
        }

        tracing::debug!("innerHTML set on {:?} ({} bytes)", target, html.len());
        Ok(())
    }

    /// Convert an RcDom node (and its subtree) under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if self.keep_whitespace || !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, &attr.value);
                    }
                }
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

fn find_child(handle: &Handle, tag: &str) -> Option<Handle> {
    handle.children.borrow().iter().find(|child| {
        matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == tag)
    }).cloned()
}
