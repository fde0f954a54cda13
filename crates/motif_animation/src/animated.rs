//! Animated components
//!
//! `AnimatedComponent` is the per-component half of the animation layer. It
//! collects the descriptors a component declares in its props and state,
//! keeps a merged parameter set per source, and turns those into CSS rule
//! blocks written to a style element the component owns.
//!
//! Styles are applied outside the render pass: a component calls
//! [`AnimatedComponent::animate`], which queues it on the frame scheduler,
//! and the scheduler applies every queued component on the next tick.
//!
//! # Lifecycle
//!
//! - [`mount`](AnimatedComponent::mount) computes the initial parameters
//! - [`update`](AnimatedComponent::update) recomputes them from the next
//!   props and state before they become current
//! - [`unmount`](AnimatedComponent::unmount) removes the style element
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use motif_animation::{
//!     animator, AnimateConfig, AnimateContext, AnimatedComponent, AnimationDescriptor,
//!     AnimatorFn, AnimatorOutput, ComponentProps, ComponentState, FrameScheduler, NoDefaults,
//! };
//! use motif_core::Document;
//! use rustc_hash::FxHashMap;
//!
//! let mut animators: FxHashMap<String, AnimatorFn> = FxHashMap::default();
//! animators.insert(
//!     "fade".into(),
//!     animator(|index, step, _| AnimatorOutput::new().style("opacity", 1.0 - (index - step).abs())),
//! );
//! let ctx = AnimateContext::new(AnimateConfig::default(), Rc::new(NoDefaults), Rc::new(animators));
//!
//! let mut doc = Document::new();
//! let scheduler = FrameScheduler::new();
//! let component = AnimatedComponent::new(&ctx);
//!
//! let props = ComponentProps::with_animations([AnimationDescriptor::new("fade")]);
//! let state = ComponentState::at(0.0, 0.5);
//! {
//!     let mut c = component.borrow_mut();
//!     c.mount(props, state);
//!     c.bind_root(doc.create_node(".0", Some("card".into())));
//!     c.animate(&scheduler.handle());
//! }
//!
//! scheduler.flush(&mut doc);
//! assert!(doc.head_css().starts_with("#card {"));
//! ```

use crate::animator::AnimateContext;
use crate::css::{rule_block, selector_for, StyleDecl, StyleMap};
use crate::descriptor::{AnimationDescriptor, Animations, SELF_SOURCE};
use crate::error::{AnimationError, Result};
use crate::params::AnimationParams;
use crate::scheduler::{FrameTarget, SchedulerHandle};
use indexmap::IndexMap;
use motif_core::{Document, NodeId, Props, StyleElementId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Animation-related props a parent passes to a component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentProps {
    /// Descriptors declared by the parent
    pub animations: Animations,
    /// Extra animator parameters, keyed by source
    pub animate_props: IndexMap<String, Props>,
    /// Disable animation for this component only
    pub animation_disabled: bool,
}

impl ComponentProps {
    pub fn with_animations(animations: impl IntoIterator<Item = AnimationDescriptor>) -> Self {
        Self {
            animations: animations.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Add extra parameters for one source
    pub fn animate_prop(mut self, source: impl Into<String>, props: Props) -> Self {
        self.animate_props.insert(source.into(), props);
        self
    }
}

/// Animation-related state a component keeps for itself
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentState {
    /// Descriptors the component adds on its own
    pub animations: Animations,
    pub step: Option<f64>,
    pub index: Option<f64>,
}

impl ComponentState {
    /// State positioned at `index`, currently at `step`
    pub fn at(index: f64, step: f64) -> Self {
        Self {
            animations: Animations::new(),
            step: Some(step),
            index: Some(index),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// Per-component animation state and behavior
pub struct AnimatedComponent {
    id: u64,
    this: Weak<RefCell<AnimatedComponent>>,
    ctx: AnimateContext,
    props: ComponentProps,
    state: ComponentState,
    /// Merged parameters per source key
    params: IndexMap<String, AnimationParams>,
    root: Option<NodeId>,
    refs: IndexMap<String, NodeId>,
    style_element: Option<StyleElementId>,
    pending: bool,
    lifecycle: Lifecycle,
    tween_step: Option<f64>,
}

impl AnimatedComponent {
    /// Create a component sharing the given context
    pub fn new(ctx: &AnimateContext) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                id: NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed),
                this: this.clone(),
                ctx: ctx.clone(),
                props: ComponentProps::default(),
                state: ComponentState::default(),
                params: IndexMap::new(),
                root: None,
                refs: IndexMap::new(),
                style_element: None,
                pending: false,
                lifecycle: Lifecycle::Created,
                tween_step: None,
            })
        })
    }

    /// Unique id of this component
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Owner tag written on this component's style element
    pub fn owner_tag(&self) -> String {
        format!("motif-{}", self.id)
    }

    pub fn props(&self) -> &ComponentProps {
        &self.props
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn mount(&mut self, props: ComponentProps, state: ComponentState) {
        self.props = props;
        self.state = state;
        self.set_animations(None, None);
        self.lifecycle = Lifecycle::Mounted;
    }

    /// Recompute parameters from the next props/state, then make them current
    pub fn update(&mut self, props: ComponentProps, state: ComponentState) {
        self.set_animations(Some(&props), Some(&state));
        self.props = props;
        self.state = state;
    }

    /// Replace only the state, e.g. after a step change
    pub fn set_state(&mut self, state: ComponentState) {
        let props = self.props.clone();
        self.update(props, state);
    }

    /// Tear down, removing the style element if one was created
    ///
    /// Returns true if a style element was removed.
    pub fn unmount(&mut self, document: &mut Document) -> bool {
        self.lifecycle = Lifecycle::Unmounted;
        match self.style_element.take() {
            Some(id) => document.remove_style_element(id).is_some(),
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Bind the component's own root element
    pub fn bind_root(&mut self, node: NodeId) {
        self.root = Some(node);
    }

    /// Bind a named sub-element
    pub fn bind_ref(&mut self, name: impl Into<String>, node: NodeId) {
        self.refs.insert(name.into(), node);
    }

    pub fn unbind_ref(&mut self, name: &str) -> Option<NodeId> {
        self.refs.shift_remove(name)
    }

    /// Step supplied by an external tween; overrides `step` for
    /// descriptors without a source while set and non-zero
    pub fn set_tween_step(&mut self, step: Option<f64>) {
        self.tween_step = step;
    }

    // =========================================================================
    // Descriptor queries
    // =========================================================================

    /// Active descriptors: props first, then state
    pub fn animations(&self) -> Animations {
        collect_animations(&self.props, Some(&self.state))
    }

    pub fn animations_disabled(&self) -> bool {
        self.props.animation_disabled || !self.ctx.config.enabled
    }

    /// Descriptors running the given animator
    pub fn find_animations(&self, animation: &str) -> Animations {
        self.animations()
            .into_iter()
            .filter(|d| d.animation == animation)
            .collect()
    }

    pub fn has_animation(&self, animation: &str) -> bool {
        !self.find_animations(animation).is_empty()
    }

    /// Cached parameters for a source (default `self`)
    pub fn animation_params(&self, source: Option<&str>) -> Option<&AnimationParams> {
        self.params.get(source.unwrap_or(SELF_SOURCE))
    }

    pub fn animation_step(&self, source: Option<&str>) -> Option<f64> {
        self.animation_params(source).and_then(|p| p.step)
    }

    /// Whether the source sits between two resting steps
    pub fn is_animating(&self, source: Option<&str>) -> bool {
        self.animation_params(source)
            .is_some_and(AnimationParams::is_mid_step)
    }

    // =========================================================================
    // Parameter merging
    // =========================================================================

    /// Recompute the per-source parameter cache
    ///
    /// With `props` absent, the current props and state are used. The cache
    /// is only replaced when at least one descriptor is active.
    pub fn set_animations(
        &mut self,
        props: Option<&ComponentProps>,
        state: Option<&ComponentState>,
    ) {
        let (props, state) = match props {
            Some(props) => (props, state),
            None => (&self.props, Some(&self.state)),
        };

        let animations = collect_animations(props, state);
        if animations.is_empty() {
            return;
        }

        let mut params = IndexMap::new();
        for descriptor in &animations {
            let source = descriptor.source_key();
            let defaults = self.ctx.store.lookup(descriptor);
            let own_state = match state {
                Some(state) if source == SELF_SOURCE => {
                    Some(AnimationParams::new(state.index, state.step))
                }
                _ => None,
            };
            params.insert(
                source.to_string(),
                AnimationParams::layered(
                    defaults.as_ref(),
                    props.animate_props.get(source),
                    own_state,
                ),
            );
        }

        tracing::trace!(component = self.id, sources = params.len(), "animation params updated");
        self.params = params;
    }

    // =========================================================================
    // Style resolution
    // =========================================================================

    /// Run every active animator and collect styles per source
    ///
    /// With `filter` set, only descriptors whose `name` matches run. Returns
    /// `None` when no descriptor is active.
    ///
    /// # Errors
    ///
    /// Fails before running an animator whose source lacks `step` or
    /// `index`, and when an animator name is not registered.
    pub fn get_animation(&self, filter: Option<&str>) -> Result<Option<StyleMap>> {
        let animations = self.animations();
        let mut styles = StyleMap::new();

        for descriptor in animations.iter().filter(|d| d.matches_name(filter)) {
            let source = descriptor.source_key();
            let mut params = self.params.get(source).cloned().unwrap_or_default();

            if params.index.is_none() {
                params.index = self.state.index;
            }
            if descriptor.targets_self() {
                if let Some(tween) = self.tween_step.filter(|s| *s != 0.0) {
                    params.step = Some(tween);
                }
            }

            let resolved = params.resolve(&descriptor.animation, source)?;
            let animator = self
                .ctx
                .animators
                .resolve(&descriptor.animation)
                .ok_or_else(|| AnimationError::UnknownAnimator(descriptor.animation.clone()))?;

            let output = animator(resolved.index, resolved.step, &resolved.extra);
            let decl: &mut StyleDecl = styles.entry(source.to_string()).or_default();
            for (key, value) in &output.styles {
                decl.insert(key.clone(), value.to_string());
            }
            // A later animator without transform components keeps an earlier
            // animator's transform for the same source
            let property = &self.ctx.config.transform_property;
            if !output.transform.is_empty() || !decl.contains_key(property) {
                decl.insert(property.clone(), output.transform.to_css());
            }
        }

        Ok((!styles.is_empty()).then_some(styles))
    }

    // =========================================================================
    // Frame application
    // =========================================================================

    /// Queue this component for the next frame
    ///
    /// No-op when animations are disabled, none are active, or the component
    /// is already queued. Returns true if the component was queued.
    pub fn animate(&mut self, scheduler: &SchedulerHandle) -> bool {
        if self.animations_disabled() || self.pending || self.animations().is_empty() {
            return false;
        }
        if scheduler.enqueue(self.this.clone()) {
            self.pending = true;
            tracing::debug!(component = self.id, "queued for next animation frame");
            true
        } else {
            false
        }
    }

    /// Whether the component is waiting for a frame
    pub fn has_pending_animations(&self) -> bool {
        self.pending
    }

    /// Compute styles and write them into this component's style element
    ///
    /// Sources whose element is not in the document are skipped. Returns the
    /// number of rule blocks written.
    pub fn apply_styles(&mut self, document: &mut Document) -> Result<usize> {
        self.pending = false;
        if !self.is_mounted() {
            return Ok(0);
        }
        let Some(styles) = self.get_animation(None)? else {
            return Ok(0);
        };

        let mut css = String::new();
        let mut blocks = 0;
        for (source, decl) in &styles {
            let node_id = if source == SELF_SOURCE {
                self.root
            } else {
                self.refs.get(source).copied()
            };
            let Some(node) = node_id.and_then(|id| document.node(id)) else {
                tracing::trace!(component = self.id, source = %source, "no element for source, skipping");
                continue;
            };

            let selector = selector_for(node, &self.ctx.config.identity_attribute);
            css.push_str(&rule_block(&selector, decl));
            blocks += 1;
        }

        let element = match self
            .style_element
            .filter(|id| document.style_element(*id).is_some())
        {
            Some(id) => id,
            None => {
                let id = document.create_style_element(self.owner_tag());
                self.style_element = Some(id);
                id
            }
        };
        document.set_style_text(element, css);
        Ok(blocks)
    }

    /// The style element this component writes to, once created
    pub fn style_element(&self) -> Option<StyleElementId> {
        self.style_element
    }
}

impl FrameTarget for AnimatedComponent {
    fn apply_frame(&mut self, document: &mut Document) -> Result<usize> {
        self.apply_styles(document)
    }

    fn frame_key(&self) -> String {
        self.owner_tag()
    }
}

fn collect_animations(props: &ComponentProps, state: Option<&ComponentState>) -> Animations {
    let mut animations = props.animations.clone();
    if let Some(state) = state {
        animations.extend(state.animations.iter().cloned());
    }
    animations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{animator, AnimatorFn, AnimatorOutput, NoDefaults};
    use crate::config::AnimateConfig;
    use crate::scheduler::FrameScheduler;
    use crate::transform::Axes;
    use motif_core::{ParamStore, PropValue};
    use rustc_hash::FxHashMap;
    use std::cell::Cell;

    thread_local! {
        static ANIMATOR_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    fn animators() -> FxHashMap<String, AnimatorFn> {
        let mut map: FxHashMap<String, AnimatorFn> = FxHashMap::default();
        map.insert(
            "slide".into(),
            animator(|index, step, extra| {
                ANIMATOR_CALLS.with(|c| c.set(c.get() + 1));
                let width = extra.get("width").and_then(|v| v.as_number()).unwrap_or(100.0);
                AnimatorOutput::new().translate(Axes::x((index - step) * width))
            }),
        );
        map.insert(
            "fade".into(),
            animator(|index, step, _| {
                ANIMATOR_CALLS.with(|c| c.set(c.get() + 1));
                AnimatorOutput::new().style("opacity", 1.0 - (index - step).abs().min(1.0))
            }),
        );
        map.insert(
            "grow".into(),
            animator(|_, step, _| AnimatorOutput::new().scale(1.0 + step)),
        );
        map
    }

    fn context() -> AnimateContext {
        AnimateContext::new(AnimateConfig::default(), Rc::new(NoDefaults), Rc::new(animators()))
    }

    fn context_with_store(store: ParamStore) -> AnimateContext {
        AnimateContext::new(AnimateConfig::default(), Rc::new(store), Rc::new(animators()))
    }

    fn width(w: f64) -> Props {
        let mut props = Props::new();
        props.insert("width".into(), w.into());
        props
    }

    fn calls() -> usize {
        ANIMATOR_CALLS.with(Cell::get)
    }

    #[test]
    fn test_one_entry_per_source() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();

        let props = ComponentProps::with_animations([
            AnimationDescriptor::new("slide"),
            AnimationDescriptor::new("fade"),
            AnimationDescriptor::new("slide").with_source("icon"),
        ])
        .animate_prop("icon", {
            let mut p = width(50.0);
            p.insert("step".into(), 1.into());
            p.insert("index".into(), 0.into());
            p
        });
        c.mount(props, ComponentState::at(1.0, 0.5));

        let styles = c.get_animation(None).unwrap().unwrap();
        assert_eq!(styles.len(), 2);

        let own = &styles["self"];
        assert_eq!(own["transform"], "translate3d(50px, 0px, 0px)");
        assert_eq!(own["opacity"], "0.5");

        let icon = &styles["icon"];
        assert_eq!(icon["transform"], "translate3d(-50px, 0px, 0px)");
    }

    #[test]
    fn test_name_filter_limits_sources() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        let mut icon_params = Props::new();
        icon_params.insert("step".into(), 0.into());
        icon_params.insert("index".into(), 0.into());

        c.mount(
            ComponentProps::with_animations([
                AnimationDescriptor::new("fade").with_name("enter"),
                AnimationDescriptor::new("grow").with_source("icon").with_name("pop"),
            ])
            .animate_prop("icon", icon_params),
            ComponentState::at(0.0, 0.0),
        );

        let styles = c.get_animation(Some("pop")).unwrap().unwrap();
        assert_eq!(styles.keys().collect::<Vec<_>>(), ["icon"]);
        assert_eq!(styles["icon"]["transform"], "scale(1) ");

        assert!(c.get_animation(Some("missing")).unwrap().is_none());
    }

    #[test]
    fn test_missing_step_fails_before_animator() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("slide")]),
            ComponentState {
                index: Some(0.0),
                ..Default::default()
            },
        );

        let before = calls();
        let err = c.get_animation(None).unwrap_err();
        assert!(matches!(err, AnimationError::MissingStep { .. }));
        assert_eq!(calls(), before);
    }

    #[test]
    fn test_missing_index_on_ref_source() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        let mut only_step = Props::new();
        only_step.insert("step".into(), 1.into());

        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("fade").with_source("label")])
                .animate_prop("label", only_step),
            ComponentState::default(),
        );

        let before = calls();
        let err = c.get_animation(None).unwrap_err();
        assert_eq!(
            err,
            AnimationError::MissingIndex {
                animation: "fade".into(),
                source_key: "label".into()
            }
        );
        assert_eq!(calls(), before);
    }

    #[test]
    fn test_ref_source_falls_back_to_state_index() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        let mut only_step = Props::new();
        only_step.insert("step".into(), 2.into());

        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("slide").with_source("label")])
                .animate_prop("label", only_step),
            ComponentState::at(3.0, 0.0),
        );

        let styles = c.get_animation(None).unwrap().unwrap();
        assert_eq!(styles["label"]["transform"], "translate3d(100px, 0px, 0px)");
    }

    #[test]
    fn test_unknown_animator() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("wobble")]),
            ComponentState::at(0.0, 0.0),
        );
        assert_eq!(
            c.get_animation(None).unwrap_err(),
            AnimationError::UnknownAnimator("wobble".into())
        );
    }

    #[test]
    fn test_no_animations_is_none() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(ComponentProps::default(), ComponentState::at(0.0, 0.0));
        assert!(c.get_animation(None).unwrap().is_none());
        assert!(c.animation_params(None).is_none());
    }

    #[test]
    fn test_param_precedence_store_props_state() {
        let store = ParamStore::new();
        let mut defaults = width(10.0);
        defaults.insert("step".into(), 0.into());
        defaults.insert("index".into(), 0.into());
        store.set("slide", defaults);

        let component = AnimatedComponent::new(&context_with_store(store));
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("slide")])
                .animate_prop("self", width(20.0)),
            ComponentState {
                step: Some(1.0),
                ..Default::default()
            },
        );

        let params = c.animation_params(None).unwrap();
        assert_eq!(params.step, Some(1.0));
        assert_eq!(params.index, Some(0.0));
        assert_eq!(params.extra.get("width"), Some(&PropValue::Number(20.0)));
        assert_eq!(c.animation_step(None), Some(1.0));
    }

    #[test]
    fn test_update_recomputes_params() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        let props = ComponentProps::with_animations([AnimationDescriptor::new("fade")]);
        c.mount(props.clone(), ComponentState::at(0.0, 0.0));
        assert!(!c.is_animating(None));

        c.update(props, ComponentState::at(0.0, 0.25));
        assert_eq!(c.animation_step(None), Some(0.25));
        assert!(c.is_animating(None));

        c.set_state(ComponentState::at(0.0, 1.0));
        assert!(!c.is_animating(None));
    }

    #[test]
    fn test_state_animations_are_appended() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
            ComponentState {
                animations: [AnimationDescriptor::new("grow").with_source("badge")]
                    .into_iter()
                    .collect(),
                ..ComponentState::at(0.0, 0.0)
            },
        );

        let names: Vec<_> = c.animations().iter().map(|d| d.animation.clone()).collect();
        assert_eq!(names, ["fade", "grow"]);
        assert!(c.has_animation("grow"));
        assert!(!c.has_animation("slide"));
        assert_eq!(c.find_animations("fade").len(), 1);
    }

    #[test]
    fn test_tween_step_overrides_self_only() {
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("grow")]),
            ComponentState::at(0.0, 1.0),
        );

        c.set_tween_step(Some(0.5));
        let styles = c.get_animation(None).unwrap().unwrap();
        assert_eq!(styles["self"]["transform"], "scale(1.5) ");

        // zero means "no tween value"
        c.set_tween_step(Some(0.0));
        let styles = c.get_animation(None).unwrap().unwrap();
        assert_eq!(styles["self"]["transform"], "scale(2) ");
    }

    #[test]
    fn test_animate_enqueues_once() {
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
            ComponentState::at(0.0, 0.0),
        );

        assert!(c.animate(&scheduler.handle()));
        assert!(!c.animate(&scheduler.handle()));
        assert!(c.has_pending_animations());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_animate_disabled_is_noop() {
        let scheduler = FrameScheduler::new();

        let globally_off = AnimateContext::new(
            AnimateConfig::disabled(),
            Rc::new(NoDefaults),
            Rc::new(animators()),
        );
        let component = AnimatedComponent::new(&globally_off);
        component.borrow_mut().mount(
            ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
            ComponentState::at(0.0, 0.0),
        );
        assert!(!component.borrow_mut().animate(&scheduler.handle()));

        let locally_off = AnimatedComponent::new(&context());
        locally_off.borrow_mut().mount(
            ComponentProps {
                animation_disabled: true,
                ..ComponentProps::with_animations([AnimationDescriptor::new("fade")])
            },
            ComponentState::at(0.0, 0.0),
        );
        assert!(!locally_off.borrow_mut().animate(&scheduler.handle()));

        let nothing_active = AnimatedComponent::new(&context());
        nothing_active
            .borrow_mut()
            .mount(ComponentProps::default(), ComponentState::at(0.0, 0.0));
        assert!(!nothing_active.borrow_mut().animate(&scheduler.handle()));

        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_flush_writes_one_block_per_resolvable_source() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());

        let root = doc.create_node(".0", Some("card".into()));
        let icon = doc.create_node(".0.1", None);
        {
            let mut c = component.borrow_mut();
            let mut ref_params = Props::new();
            ref_params.insert("step".into(), 0.into());
            ref_params.insert("index".into(), 0.into());
            c.mount(
                ComponentProps::with_animations([
                    AnimationDescriptor::new("fade"),
                    AnimationDescriptor::new("grow").with_source("icon"),
                    AnimationDescriptor::new("grow").with_source("ghost"),
                ])
                .animate_prop("icon", ref_params.clone())
                .animate_prop("ghost", ref_params),
                ComponentState::at(0.0, 0.0),
            );
            c.bind_root(root);
            c.bind_ref("icon", icon);
            assert!(c.animate(&scheduler.handle()));
        }

        let report = scheduler.flush(&mut doc);
        assert!(report.is_ok());
        assert_eq!(report.applied, 1);
        assert_eq!(report.rule_blocks, 2);
        assert!(scheduler.is_empty());

        let c = component.borrow();
        assert!(!c.has_pending_animations());
        let css = &doc.style_element(c.style_element().unwrap()).unwrap().css;
        assert_eq!(
            css,
            "#card {\n  opacity: 1;\n  transform: translateZ(0px);\n}\n\
             [data-render-id=\".0.1\"] {\n  transform: scale(1) ;\n}\n"
        );
        assert_eq!(doc.style_count(), 1);
    }

    #[test]
    fn test_style_element_is_reused() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        let props = ComponentProps::with_animations([AnimationDescriptor::new("grow")]);
        {
            let mut c = component.borrow_mut();
            c.mount(props.clone(), ComponentState::at(0.0, 0.0));
            c.bind_root(doc.create_node(".0", None));
            c.animate(&scheduler.handle());
        }
        scheduler.flush(&mut doc);
        let first = component.borrow().style_element();

        {
            let mut c = component.borrow_mut();
            c.update(props, ComponentState::at(0.0, 1.0));
            assert!(c.animate(&scheduler.handle()));
        }
        scheduler.flush(&mut doc);

        assert_eq!(component.borrow().style_element(), first);
        assert_eq!(doc.style_count(), 1);
        assert!(doc.head_css().contains("scale(2) "));
        assert!(!doc.head_css().contains("scale(1) "));
    }

    #[test]
    fn test_flush_surfaces_precondition_failure() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        {
            let mut c = component.borrow_mut();
            c.mount(
                ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
                ComponentState::default(),
            );
            c.animate(&scheduler.handle());
        }

        let report = scheduler.flush(&mut doc);
        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0].1, AnimationError::MissingStep { .. }));
        assert!(!component.borrow().has_pending_animations());
        assert_eq!(doc.style_count(), 0);
    }

    #[test]
    fn test_unmount_removes_style_element() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        {
            let mut c = component.borrow_mut();
            c.mount(
                ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
                ComponentState::at(0.0, 0.0),
            );
            c.bind_root(doc.create_node(".0", None));
            c.animate(&scheduler.handle());
        }
        scheduler.flush(&mut doc);
        assert_eq!(doc.style_count(), 1);

        assert!(component.borrow_mut().unmount(&mut doc));
        assert_eq!(doc.style_count(), 0);
        assert!(!component.borrow().is_mounted());

        // second unmount has nothing to remove
        assert!(!component.borrow_mut().unmount(&mut doc));
    }

    #[test]
    fn test_unmount_without_style_element_is_noop() {
        let mut doc = Document::new();
        let other = doc.create_style_element("someone-else");
        let component = AnimatedComponent::new(&context());
        assert!(!component.borrow_mut().unmount(&mut doc));
        assert!(doc.style_element(other).is_some());
    }

    #[test]
    fn test_borrowed_component_flushes_next_tick() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        {
            let mut c = component.borrow_mut();
            c.mount(
                ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
                ComponentState::at(0.0, 0.0),
            );
            c.bind_root(doc.create_node(".0", None));
            assert!(c.animate(&scheduler.handle()));
        }

        let report = {
            let _host_borrow = component.borrow();
            scheduler.flush(&mut doc)
        };
        assert_eq!(report.applied, 0);
        assert_eq!(report.requeued, 1);
        assert_eq!(scheduler.pending_count(), 1);
        assert!(component.borrow().has_pending_animations());
        assert_eq!(doc.style_count(), 0);

        let report = scheduler.flush(&mut doc);
        assert_eq!(report.applied, 1);
        assert_eq!(doc.style_count(), 1);

        let mut c = component.borrow_mut();
        assert!(!c.has_pending_animations());
        assert!(c.animate(&scheduler.handle()));
    }

    #[test]
    fn test_unmounted_component_is_not_applied() {
        let mut doc = Document::new();
        let scheduler = FrameScheduler::new();
        let component = AnimatedComponent::new(&context());
        {
            let mut c = component.borrow_mut();
            c.mount(
                ComponentProps::with_animations([AnimationDescriptor::new("fade")]),
                ComponentState::at(0.0, 0.0),
            );
            c.animate(&scheduler.handle());
            c.unmount(&mut doc);
        }
        let report = scheduler.flush(&mut doc);
        assert_eq!(report.rule_blocks, 0);
        assert_eq!(doc.style_count(), 0);
    }

    #[test]
    fn test_custom_transform_property() {
        let ctx = AnimateContext::new(
            AnimateConfig {
                transform_property: "-webkit-transform".into(),
                ..AnimateConfig::default()
            },
            Rc::new(NoDefaults),
            Rc::new(animators()),
        );
        let component = AnimatedComponent::new(&ctx);
        let mut c = component.borrow_mut();
        c.mount(
            ComponentProps::with_animations([AnimationDescriptor::new("grow")]),
            ComponentState::at(0.0, 0.0),
        );
        let styles = c.get_animation(None).unwrap().unwrap();
        assert!(styles["self"].contains_key("-webkit-transform"));
        assert!(!styles["self"].contains_key("transform"));
    }
}
