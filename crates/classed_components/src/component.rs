//! Generated component bound to a CSS class and a default element tag

use crate::Props;
use classed_core::Value;
use classed_vdom::VNode;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tag rendered when neither the element mapping nor the caller names one.
pub const DEFAULT_TAG: &str = "div";

/// A reusable component generated from one style-mapping entry.
///
/// Components are immutable after construction; rendering reads only the
/// bound fields and the per-call [`Props`], so components from the same or
/// different factory calls can render concurrently without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Debug identifier, equal to the logical name it was generated from.
    pub name: String,
    /// CSS class applied to every node this component renders.
    pub class_name: String,
    /// Element tag rendered when the caller does not override it.
    pub tag: String,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            tag: tag.into(),
        }
    }

    /// Render one instance of this component.
    ///
    /// The element tag is the caller's override if given, else the bound
    /// default. The `class` attribute joins the bound class and the caller's
    /// extra class with a space, dropping empty pieces. Everything else in
    /// the props bag is copied onto the node unchanged, and the children
    /// become the node's content. A supplied [`classed_vdom::NodeRef`] is
    /// filled with the produced node.
    pub fn render(&self, props: Props) -> VNode {
        let Props {
            children,
            class_name,
            tag,
            node_ref,
            attrs,
        } = props;

        let tag = tag.unwrap_or_else(|| self.tag.clone());

        let mut pieces: SmallVec<[&str; 2]> = SmallVec::new();
        if !self.class_name.is_empty() {
            pieces.push(self.class_name.as_str());
        }
        if let Some(extra) = class_name.as_deref() {
            if !extra.is_empty() {
                pieces.push(extra);
            }
        }

        let mut node = VNode::element(tag);
        node.attrs
            .insert("class".to_string(), Value::String(pieces.join(" ")));
        for (key, value) in attrs {
            node.attrs.insert(key, value);
        }
        node.children = children;

        if let Some(node_ref) = node_ref {
            node_ref.set(node.clone());
        }

        node
    }

    /// Render straight to an HTML string.
    pub fn render_html(&self, props: Props) -> String {
        self.render(props).to_html()
    }
}
