//! Motif Core
//!
//! Foundational pieces shared by the Motif animation crates:
//!
//! - **Prop values**: loosely typed parameters passed to animators
//! - **Parameter store**: keyed default animation parameters
//! - **Document model**: render nodes and head style elements

pub mod document;
pub mod store;
pub mod value;

pub use document::{Document, Node, NodeId, StyleElement, StyleElementId};
pub use store::ParamStore;
pub use value::{format_number, PropValue, Props, PropsExt};
