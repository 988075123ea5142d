//! Generated components for CSS-module style mappings
//!
//! A CSS-modules build tool turns a stylesheet into a flat mapping of logical
//! names to generated class names. This crate turns that mapping into a set
//! of reusable components, one per logical name, each rendering an element
//! with the corresponding class applied.
//!
//! ```
//! use classed_components::{css_components_with, ElementMap, Props, StyleMap};
//!
//! let mut styles = StyleMap::default();
//! styles.insert("Card".to_string(), "Card_x7f2".into());
//! styles.insert("Title".to_string(), "Title_q91c".into());
//!
//! let mut elements = ElementMap::default();
//! elements.insert("Title".to_string(), "h1".to_string());
//!
//! let components = css_components_with(&styles, &elements);
//! let node = components["Title"].render(Props::new().text("Hello"));
//! assert_eq!(node.to_html(), r#"<h1 class="Title_q91c">Hello</h1>"#);
//! ```

use classed_core::{OrderedMap, Value};
use tracing::{debug, trace};

pub mod component;
pub mod manifest;
pub mod props;

pub use component::{Component, DEFAULT_TAG};
pub use props::Props;

/// Style mapping: logical component name to CSS class name.
///
/// Values are heterogeneous because CSS-module tooling may inject metadata
/// entries; anything that is not a string is skipped by the factory.
pub type StyleMap = OrderedMap<Value>;

/// Element mapping: logical component name to the element tag its component
/// renders by default.
pub type ElementMap = OrderedMap<String>;

/// Output of the factory, keyed by logical name in style-mapping order.
pub type ComponentMap = OrderedMap<Component>;

/// Generate components from a style mapping, rendering the generic container
/// tag for every entry.
pub fn css_components(styles: &StyleMap) -> ComponentMap {
    css_components_with(styles, &ElementMap::default())
}

/// Generate components from a style mapping, consulting `elements` for the
/// default tag of each logical name.
///
/// Entries whose value is not a string, and entries whose key starts with a
/// dot (utility classes some CSS-module tooling emits), do not become
/// components. Output order follows style-mapping order.
pub fn css_components_with(styles: &StyleMap, elements: &ElementMap) -> ComponentMap {
    let mut components = ComponentMap::default();

    for (name, entry) in styles {
        let Some(class_name) = entry.as_str() else {
            trace!(name = %name, "skipping non-string style entry");
            continue;
        };
        if name.starts_with('.') {
            trace!(name = %name, "skipping utility class entry");
            continue;
        }

        let tag = elements
            .get(name)
            .cloned()
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        components.insert(name.clone(), Component::new(name.clone(), class_name, tag));
    }

    debug!(
        built = components.len(),
        total = styles.len(),
        "generated components"
    );
    components
}
