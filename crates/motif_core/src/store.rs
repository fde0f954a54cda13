//! Parameter store for animation defaults
//!
//! Holds default animation parameters outside any component tree. A parent
//! that wants its children to animate writes `step`/`index` and any extra
//! parameters under a key; every child whose descriptor maps to that key picks
//! them up on its next `set_animations`. Writing does not re-render anything,
//! it only notifies subscribers.
//!
//! # Example
//!
//! ```rust
//! use motif_core::store::ParamStore;
//!
//! let store = ParamStore::new();
//! store.update("slide", |params| {
//!     params.insert("step".into(), 0.5.into());
//! });
//! assert!(store.contains("slide"));
//! ```

use crate::value::Props;
use rustc_hash::FxHashMap;
use std::sync::{Arc, PoisonError, RwLock};

type Subscriber = Arc<dyn Fn(&Props) + Send + Sync>;

/// Keyed store of default parameter sets
pub struct ParamStore {
    entries: RwLock<FxHashMap<String, Props>>,
    subscribers: RwLock<FxHashMap<String, Vec<Subscriber>>>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            subscribers: RwLock::new(FxHashMap::default()),
        }
    }

    /// Defaults stored under `key`, if any
    pub fn lookup(&self, key: &str) -> Option<Props> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Replace the defaults stored under `key`
    pub fn set(&self, key: &str, params: Props) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), params.clone());
        self.notify(key, &params);
    }

    /// Modify the defaults under `key` in place, creating an empty set first
    pub fn update<F>(&self, key: &str, f: F)
    where
        F: FnOnce(&mut Props),
    {
        let params = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            let params = entries.entry(key.to_string()).or_default();
            f(params);
            params.clone()
        };
        self.notify(key, &params);
    }

    /// Drop the defaults and subscribers for `key`
    pub fn remove(&self, key: &str) -> Option<Props> {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// All keys with stored defaults, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Call `callback` whenever the defaults under `key` change
    pub fn subscribe<F>(&self, key: &str, callback: F)
    where
        F: Fn(&Props) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.to_string())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Callbacks run outside the lock, so they may subscribe or remove keys
    fn notify(&self, key: &str, params: &Props) {
        let subs: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_default();
        if subs.is_empty() {
            return;
        }
        tracing::trace!(key, count = subs.len(), "notifying store subscribers");
        for callback in &subs {
            callback(params);
        }
    }
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}
