//! Animation configuration
//!
//! Passed to every `AnimatedComponent` at construction. Hosts usually load it
//! from the `[config]` table of a TOML file; every field has a default.

use serde::{Deserialize, Serialize};

/// Construction-time animation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimateConfig {
    /// Global switch; when false `animate()` is a no-op for every component
    pub enabled: bool,
    /// CSS property name the synthesized transform is written under
    pub transform_property: String,
    /// Attribute used to select elements that have no DOM id
    pub identity_attribute: String,
}

impl Default for AnimateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transform_property: "transform".to_string(),
            identity_attribute: "data-render-id".to_string(),
        }
    }
}

impl AnimateConfig {
    /// Config with animations switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
