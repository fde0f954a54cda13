//! Animator functions and the collaborators that supply them
//!
//! An animator is a pure function of `(index, step, extra)`. Themes register
//! animators by name; components look them up through an
//! [`AnimatorResolver`] and pull default parameters through an
//! [`AnimateStore`]. Both are bundled with the config in an
//! [`AnimateContext`] handed to every component.

use crate::config::AnimateConfig;
use crate::descriptor::AnimationDescriptor;
use crate::transform::{Axes, TransformParts};
use motif_core::{ParamStore, PropValue, Props};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use std::sync::Arc;

/// What an animator returns: transform components plus plain styles
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatorOutput {
    pub transform: TransformParts,
    /// Non-transform styles, e.g. `opacity`
    pub styles: Props,
}

impl AnimatorOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.transform.scale = Some(scale);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.transform.rotate = Some(degrees);
        self
    }

    pub fn rotate3d(mut self, axes: Axes) -> Self {
        self.transform.rotate3d = Some(axes);
        self
    }

    pub fn translate(mut self, axes: Axes) -> Self {
        self.transform.translate = Some(axes);
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }
}

/// An animator function: `(index, step, extra) -> output`
pub type AnimatorFn = Arc<dyn Fn(f64, f64, &Props) -> AnimatorOutput + Send + Sync>;

/// Wrap a closure as an [`AnimatorFn`]
pub fn animator<F>(f: F) -> AnimatorFn
where
    F: Fn(f64, f64, &Props) -> AnimatorOutput + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Resolves animator names to functions
pub trait AnimatorResolver {
    fn resolve(&self, name: &str) -> Option<AnimatorFn>;
}

impl AnimatorResolver for FxHashMap<String, AnimatorFn> {
    fn resolve(&self, name: &str) -> Option<AnimatorFn> {
        self.get(name).cloned()
    }
}

/// Supplies default parameters for a descriptor
pub trait AnimateStore {
    fn lookup(&self, descriptor: &AnimationDescriptor) -> Option<Props>;
}

impl AnimateStore for ParamStore {
    fn lookup(&self, descriptor: &AnimationDescriptor) -> Option<Props> {
        ParamStore::lookup(self, descriptor.store_key())
    }
}

/// Store with no defaults at all
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDefaults;

impl AnimateStore for NoDefaults {
    fn lookup(&self, _descriptor: &AnimationDescriptor) -> Option<Props> {
        None
    }
}

/// Everything a component needs from its surroundings to animate
#[derive(Clone)]
pub struct AnimateContext {
    pub config: AnimateConfig,
    pub store: Rc<dyn AnimateStore>,
    pub animators: Rc<dyn AnimatorResolver>,
}

impl AnimateContext {
    pub fn new(
        config: AnimateConfig,
        store: Rc<dyn AnimateStore>,
        animators: Rc<dyn AnimatorResolver>,
    ) -> Self {
        Self {
            config,
            store,
            animators,
        }
    }
}
