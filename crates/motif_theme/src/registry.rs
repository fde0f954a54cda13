//! Animator registry
//!
//! Maps animation names to animator functions. A theme fills one registry;
//! components resolve names against it through `AnimatorResolver`.

use motif_animation::{animator, AnimatorFn, AnimatorOutput, AnimatorResolver};
use motif_core::Props;
use rustc_hash::FxHashMap;

/// Named animator functions
#[derive(Clone, Default)]
pub struct AnimatorRegistry {
    animators: FxHashMap<String, AnimatorFn>,
}

impl AnimatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animator, returning the one it replaced
    pub fn register(&mut self, name: impl Into<String>, f: AnimatorFn) -> Option<AnimatorFn> {
        let name = name.into();
        let previous = self.animators.insert(name.clone(), f);
        if previous.is_some() {
            tracing::debug!(name = %name, "replaced registered animator");
        }
        previous
    }

    /// Register a plain closure as an animator
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> Option<AnimatorFn>
    where
        F: Fn(f64, f64, &Props) -> AnimatorOutput + Send + Sync + 'static,
    {
        self.register(name, animator(f))
    }

    pub fn get(&self, name: &str) -> Option<&AnimatorFn> {
        self.animators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animators.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AnimatorFn> {
        self.animators.remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Copy every animator from `other`, overriding on name clashes
    pub fn extend(&mut self, other: &AnimatorRegistry) {
        for (name, f) in &other.animators {
            self.animators.insert(name.clone(), f.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }
}

impl AnimatorResolver for AnimatorRegistry {
    fn resolve(&self, name: &str) -> Option<AnimatorFn> {
        self.animators.get(name).cloned()
    }
}

impl std::fmt::Debug for AnimatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatorRegistry")
            .field("animators", &self.names())
            .finish()
    }
}
