//! wick HTML loader
//!
//! Builds `wick_dom::Document` trees from markup using html5ever.

mod parser;

pub use parser::HtmlParser;

use wick_dom::{Document, DomError, NodeId};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Replace the children of `target` with parsed markup (`innerHTML = ...`)
pub fn set_inner_html(doc: &mut Document, target: NodeId, html: &str) -> Result<(), DomError> {
    HtmlParser::new().set_inner_html(doc, target, html)
}
