//! Render-time property bag for generated components

use classed_core::Value;
use classed_vdom::{AttrMap, NodeRef, VNode};

/// Properties for one render call.
///
/// The bag is open-ended: anything the render contract does not interpret
/// itself lands in `attrs` and is passed through to the rendered node
/// unchanged. No type enforcement happens here; the rendering host sees
/// whatever the caller supplied.
#[derive(Debug, Clone, Default)]
pub struct Props {
    /// Nested content payload.
    pub children: Vec<VNode>,
    /// Extra CSS class joined after the component's bound class.
    pub class_name: Option<String>,
    /// Per-instance element tag override.
    pub tag: Option<String>,
    /// Output handle filled with the rendered node.
    pub node_ref: Option<NodeRef>,
    /// Pass-through attributes, in insertion order.
    pub attrs: AttrMap,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    /// Shorthand for a single text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(VNode::text(content))
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates() {
        let props = Props::new()
            .text("hello")
            .class_name("extra")
            .tag("a")
            .attr("href", "/docs")
            .attr("tabindex", 1i64);

        assert_eq!(props.children.len(), 1);
        assert_eq!(props.class_name.as_deref(), Some("extra"));
        assert_eq!(props.tag.as_deref(), Some("a"));
        assert_eq!(props.attrs.len(), 2);
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let props = Props::new().attr("b", "1").attr("a", "2").attr("c", "3");
        let keys: Vec<_> = props.attrs.keys().cloned().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }
}
