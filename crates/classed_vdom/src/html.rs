//! HTML serialization for virtual DOM nodes
//!
//! Converts a [`VNode`] tree into an HTML string. Text and attribute values
//! are escaped; boolean attributes render bare (`disabled`) and only when
//! true; `Null` attribute values are omitted entirely.

use crate::VNode;
use classed_core::Value;

/// Elements with no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render a node tree to an HTML string.
pub fn render_html(node: &VNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &VNode, out: &mut String) {
    if node.is_text() {
        out.push_str(&html_escape(node.text.as_deref().unwrap_or("")));
        return;
    }

    out.push('<');
    out.push_str(&node.tag);

    for (key, value) in &node.attrs {
        match value {
            Value::Null => {}
            Value::Bool(_) => {
                if value.is_truthy() {
                    out.push(' ');
                    out.push_str(key);
                }
            }
            other => {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&html_escape(&other.to_string()));
                out.push('"');
            }
        }
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
        return;
    }

    for child in &node.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

/// HTML escape function for safety
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
