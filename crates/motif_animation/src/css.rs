//! Style text generation
//!
//! Resolved animation styles are written into a head style element as one
//! rule block per animated element:
//!
//! ```text
//! #title {
//!   opacity: 0.5;
//!   transform: translate3d(12px, 0px, 0px);
//! }
//! ```

use indexmap::IndexMap;
use motif_core::Node;
use std::fmt::Write;

/// CSS declarations for one element, in insertion order
pub type StyleDecl = IndexMap<String, String>;

/// Declarations keyed by source (`self` or a ref name)
pub type StyleMap = IndexMap<String, StyleDecl>;

/// Render declarations as `key: value;` lines
pub fn styles_to_string(decl: &StyleDecl) -> String {
    let mut out = String::new();
    for (key, value) in decl {
        let _ = writeln!(out, "  {key}: {value};");
    }
    out
}

/// Selector targeting a rendered node
///
/// Prefers the DOM id; falls back to the node's render identity attribute.
pub fn selector_for(node: &Node, identity_attribute: &str) -> String {
    match node.dom_id.as_deref() {
        Some(id) if !id.is_empty() => format!("#{id}"),
        _ => format!("[{identity_attribute}=\"{}\"]", node.render_id),
    }
}

/// A complete rule block for one selector
pub fn rule_block(selector: &str, decl: &StyleDecl) -> String {
    format!("{selector} {{\n{}}}\n", styles_to_string(decl))
}
