//! Virtual DOM node model for generated components
//!
//! This crate provides the render instruction produced by classed components:
//! a lightweight virtual DOM node plus a forwardable handle to the rendered
//! output. Hosts walk the node tree (or serialize it) to produce real output.

use ahash::RandomState;
use classed_core::{Result, Value};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod html;

/// Attribute bag carried by a [`VNode`], in insertion order.
pub type AttrMap = IndexMap<String, Value, RandomState>;

/// A virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    pub tag: String,
    pub attrs: AttrMap,
    pub children: Vec<VNode>,
    pub text: Option<String>,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttrMap::default(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: "#text".to_string(),
            attrs: AttrMap::default(),
            children: Vec::new(),
            text: Some(content.into()),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<VNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == "#text"
    }

    /// Serialize this node tree to an HTML string.
    pub fn to_html(&self) -> String {
        html::render_html(self)
    }

    /// Serialize this node tree to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A forwardable handle to the rendered output of a component.
///
/// The render contract fills the handle with the node it produced, so the
/// caller that supplied the ref can inspect the concrete rendered output.
/// A rendering host may overwrite the slot later with its own mounted node.
/// Handles are cheap to clone and share one slot.
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    inner: Arc<RwLock<Option<VNode>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slot, replacing any previous node.
    pub fn set(&self, node: VNode) {
        *self.inner.write() = Some(node);
    }

    /// Snapshot of the node currently in the slot.
    pub fn get(&self) -> Option<VNode> {
        self.inner.read().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.read().is_some()
    }
}
