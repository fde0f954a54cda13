//! In-memory document model
//!
//! The animation layer never touches a real DOM. It sees two things:
//!
//! - **Render nodes**: the elements a component rendered. Each node has a
//!   render identity (the value a host writes into its identity attribute)
//!   and may carry a DOM `id`.
//! - **Head style elements**: `<style>` tags appended to the document head.
//!   Each is tagged with the component that owns it.
//!
//! A browser host mirrors the head into real `<style>` tags. Tests and the
//! demo CLI read it back directly.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a render node
    pub struct NodeId;
    /// Handle to a head style element
    pub struct StyleElementId;
}

/// An element in the render tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// DOM id attribute, if the element was given one
    pub dom_id: Option<String>,
    /// Render identity, unique per rendered element
    pub render_id: String,
}

/// A `<style>` element in the document head
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleElement {
    /// Tag identifying the owning component
    pub owner: String,
    /// CSS text content
    pub css: String,
}

/// Render nodes plus the document head
#[derive(Debug, Default)]
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    styles: SlotMap<StyleElementId, StyleElement>,
    /// Head order of style elements
    head: Vec<StyleElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Render nodes
    // =========================================================================

    pub fn create_node(&mut self, render_id: impl Into<String>, dom_id: Option<String>) -> NodeId {
        self.nodes.insert(Node {
            dom_id,
            render_id: render_id.into(),
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Remove a node, e.g. when its element leaves the render tree
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.remove(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // =========================================================================
    // Head style elements
    // =========================================================================

    /// Create an empty style element and append it to the head
    pub fn create_style_element(&mut self, owner: impl Into<String>) -> StyleElementId {
        let id = self.styles.insert(StyleElement {
            owner: owner.into(),
            css: String::new(),
        });
        self.head.push(id);
        id
    }

    pub fn style_element(&self, id: StyleElementId) -> Option<&StyleElement> {
        self.styles.get(id)
    }

    /// Replace the text of a style element
    ///
    /// Returns false if the element is no longer in the document.
    pub fn set_style_text(&mut self, id: StyleElementId, css: impl Into<String>) -> bool {
        match self.styles.get_mut(id) {
            Some(element) => {
                element.css = css.into();
                true
            }
            None => false,
        }
    }

    /// Append to the text of a style element
    pub fn append_style_text(&mut self, id: StyleElementId, css: &str) -> bool {
        match self.styles.get_mut(id) {
            Some(element) => {
                element.css.push_str(css);
                true
            }
            None => false,
        }
    }

    /// Detach a style element from the head
    pub fn remove_style_element(&mut self, id: StyleElementId) -> Option<StyleElement> {
        let removed = self.styles.remove(id)?;
        self.head.retain(|&h| h != id);
        Some(removed)
    }

    /// Style elements in head order
    pub fn head(&self) -> impl Iterator<Item = (StyleElementId, &StyleElement)> + '_ {
        self.head
            .iter()
            .filter_map(move |&id| self.styles.get(id).map(|el| (id, el)))
    }

    pub fn style_count(&self) -> usize {
        self.head.len()
    }

    /// Concatenated CSS of every head style element
    pub fn head_css(&self) -> String {
        self.head().map(|(_, el)| el.css.as_str()).collect()
    }
}
