//! Animation descriptors
//!
//! A descriptor names the animator to run and the sub-element it drives:
//!
//! ```rust
//! use motif_animation::AnimationDescriptor;
//!
//! // Animate the component's own root element
//! let own = AnimationDescriptor::new("fade");
//! assert_eq!(own.source_key(), "self");
//!
//! // Animate the element referenced as `icon`, driven by a parent's params
//! let icon = AnimationDescriptor::new("move_to_right").with_source("icon");
//! assert_eq!(icon.source_key(), "icon");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Source key of a component's own root element
pub const SELF_SOURCE: &str = "self";

/// Ordered list of descriptors active on a component
pub type Animations = SmallVec<[AnimationDescriptor; 2]>;

/// Declares which animator runs and which sub-element it targets
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Name of the animator function in the theme registry
    pub animation: String,
    /// Referenced sub-element; the component itself when absent
    #[serde(default)]
    pub source: Option<String>,
    /// Identifier used to filter descriptors and key store defaults
    #[serde(default)]
    pub name: Option<String>,
}

impl AnimationDescriptor {
    pub fn new(animation: impl Into<String>) -> Self {
        Self {
            animation: animation.into(),
            source: None,
            name: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Key of the targeted sub-element
    pub fn source_key(&self) -> &str {
        self.source.as_deref().unwrap_or(SELF_SOURCE)
    }

    /// Whether this descriptor targets the component's own element
    pub fn targets_self(&self) -> bool {
        self.source.is_none()
    }

    /// Key under which the parameter store holds defaults for this descriptor
    pub fn store_key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.animation)
    }

    /// Whether this descriptor passes an optional name filter
    pub fn matches_name(&self, filter: Option<&str>) -> bool {
        match filter {
            Some(name) => self.name.as_deref() == Some(name),
            None => true,
        }
    }

    /// Same animator driving the same source
    pub fn is_same_animation(&self, other: &Self) -> bool {
        self.animation == other.animation && self.source == other.source
    }
}
