//! Error types for motif_animation

use thiserror::Error;

/// Errors raised while resolving a component's animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The parameter set for a source has no `step`
    #[error("must define step for animation `{animation}` on source `{source_key}` to run")]
    MissingStep {
        animation: String,
        source_key: String,
    },

    /// The parameter set for a source has no `index`
    #[error("must define index for animation `{animation}` on source `{source_key}` to run")]
    MissingIndex {
        animation: String,
        source_key: String,
    },

    /// No animator with this name is registered in the theme
    #[error("no animator registered for `{0}`")]
    UnknownAnimator(String),
}

/// Result type for motif_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
