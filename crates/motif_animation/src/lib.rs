//! Motif Animation
//!
//! Drives per-element CSS animation for a tree of UI components.
//!
//! # Features
//!
//! - **Descriptors**: components declare which animator drives which element
//! - **Layered parameters**: store defaults < parent props < own state
//! - **Transform synthesis**: scale/rotate/translate components to CSS
//! - **Frame batching**: `animate()` queues; one flush per display refresh
//!   writes every queued component's style element

pub mod animated;
pub mod animator;
pub mod config;
pub mod css;
pub mod descriptor;
pub mod error;
pub mod params;
pub mod scheduler;
pub mod transform;

pub use animated::{AnimatedComponent, ComponentProps, ComponentState};
pub use animator::{
    animator, AnimateContext, AnimateStore, AnimatorFn, AnimatorOutput, AnimatorResolver,
    NoDefaults,
};
pub use config::AnimateConfig;
pub use css::{rule_block, selector_for, styles_to_string, StyleDecl, StyleMap};
pub use descriptor::{AnimationDescriptor, Animations, SELF_SOURCE};
pub use error::{AnimationError, Result};
pub use params::{AnimationParams, ResolvedParams};
pub use scheduler::{
    FlushReport, FrameCallback, FrameScheduler, FrameTarget, SchedulerHandle, TargetRef,
};
pub use transform::{Axes, TransformParts, NEUTRAL_TRANSFORM};
