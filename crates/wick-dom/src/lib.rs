//! wick DOM - Document Object Model
//!
//! Small arena-based DOM with the host surface UI wiring needs:
//! lookup by id and selector, attributes, class list, dataset,
//! event listeners with bubbling dispatch, and scroll-by requests.

mod node;
mod tree;
mod document;
mod classlist;
mod dataset;
mod selector;
mod events;
mod scroll;

pub use node::{Node, NodeData, ElementData, Attribute};
pub use tree::{DomTree, Children};
pub use document::Document;
pub use classlist::DOMTokenList;
pub use dataset::{to_attribute_name, to_camel_case, to_kebab_case};
pub use selector::{Selector, CompoundSelector, AttrSelector};
pub use events::{Event, Listener, ListenerId};
pub use scroll::{ScrollBehavior, ScrollOptions, ScrollPosition, ScrollState};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this points at a node
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Raw arena index
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// DOM errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {0:?} does not exist")]
    NodeNotFound(NodeId),
}
