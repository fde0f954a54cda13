//! Themes
//!
//! A theme is a named animator registry. `Theme::standard()` carries every
//! preset; `Theme::empty()` starts bare for apps that register their own.

use crate::presets::register_presets;
use crate::registry::AnimatorRegistry;
use motif_animation::{AnimatorFn, AnimatorResolver};
use std::rc::Rc;

/// A named set of animators
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    animators: AnimatorRegistry,
}

impl Theme {
    /// Theme with no animators
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animators: AnimatorRegistry::new(),
        }
    }

    /// Theme carrying every preset animator
    pub fn standard() -> Self {
        let mut theme = Self::empty("standard");
        register_presets(&mut theme.animators);
        theme
    }

    /// Look up a built-in theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "empty" => Some(Self::empty("empty")),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn animators(&self) -> &AnimatorRegistry {
        &self.animators
    }

    pub fn animators_mut(&mut self) -> &mut AnimatorRegistry {
        &mut self.animators
    }

    /// Builder-style animator registration
    pub fn with_animator(mut self, name: impl Into<String>, f: AnimatorFn) -> Self {
        self.animators.register(name, f);
        self
    }

    /// Share the registry as a resolver for `AnimateContext`
    pub fn into_resolver(self) -> Rc<dyn AnimatorResolver> {
        Rc::new(self.animators)
    }
}

impl AnimatorResolver for Theme {
    fn resolve(&self, name: &str) -> Option<AnimatorFn> {
        self.animators.resolve(name)
    }
}
