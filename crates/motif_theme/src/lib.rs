//! Motif Theme
//!
//! Animator registries and the preset animators shipped with Motif.
//!
//! # Example
//!
//! ```rust
//! use motif_animation::AnimatorResolver;
//! use motif_core::Props;
//! use motif_theme::Theme;
//!
//! let theme = Theme::standard();
//! let fade = theme.resolve("fade").unwrap();
//! let out = fade(1.0, 0.5, &Props::new());
//! assert_eq!(out.styles["opacity"].as_number(), Some(0.5));
//! ```

pub mod presets;
pub mod registry;
pub mod theme;

pub use presets::register_presets;
pub use registry::AnimatorRegistry;
pub use theme::Theme;
