//! Animation parameter sets
//!
//! Every source a component animates gets one `AnimationParams`, assembled
//! from three layers in increasing precedence:
//!
//! 1. store defaults for the descriptor
//! 2. animation-scoped props the parent passed for that source
//! 3. the component's own `step`/`index` state (only for the `self` source)
//!
//! A higher layer only overrides what it actually defines.

use crate::error::{AnimationError, Result};
use motif_core::{Props, PropsExt};

const STEP: &str = "step";
const INDEX: &str = "index";

/// Merged parameters for one animated source
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationParams {
    /// Position of the element in its sequence
    pub index: Option<f64>,
    /// Current animation progress; whole numbers are resting positions
    pub step: Option<f64>,
    /// Anything else the animator may read
    pub extra: Props,
}

/// Parameters with both drivers present, ready for an animator
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedParams {
    pub index: f64,
    pub step: f64,
    pub extra: Props,
}

impl AnimationParams {
    pub fn new(index: Option<f64>, step: Option<f64>) -> Self {
        Self {
            index,
            step,
            extra: Props::new(),
        }
    }

    /// Split a prop bag into drivers and extras
    ///
    /// `step` and `index` are taken out of the bag; non-numeric values for
    /// them count as undefined.
    pub fn from_props(props: &Props) -> Self {
        let mut extra = props.clone();
        let step = props.number(STEP);
        let index = props.number(INDEX);
        extra.shift_remove(STEP);
        extra.shift_remove(INDEX);
        Self { index, step, extra }
    }

    /// Layer `higher` on top of `self`
    pub fn merge(&mut self, higher: AnimationParams) {
        if higher.index.is_some() {
            self.index = higher.index;
        }
        if higher.step.is_some() {
            self.step = higher.step;
        }
        self.extra.extend(higher.extra);
    }

    /// Assemble a parameter set from its three layers
    pub fn layered(
        defaults: Option<&Props>,
        incoming: Option<&Props>,
        own_state: Option<AnimationParams>,
    ) -> Self {
        let mut params = defaults.map(Self::from_props).unwrap_or_default();
        if let Some(incoming) = incoming {
            params.merge(Self::from_props(incoming));
        }
        if let Some(own) = own_state {
            params.merge(own);
        }
        params
    }

    /// Whether `step` sits between two resting positions
    pub fn is_mid_step(&self) -> bool {
        self.step.is_some_and(|step| step % 1.0 != 0.0)
    }

    /// Require both drivers, naming the animation and source on failure
    pub fn resolve(&self, animation: &str, source_key: &str) -> Result<ResolvedParams> {
        let step = self.step.ok_or_else(|| AnimationError::MissingStep {
            animation: animation.to_string(),
            source_key: source_key.to_string(),
        })?;
        let index = self.index.ok_or_else(|| AnimationError::MissingIndex {
            animation: animation.to_string(),
            source_key: source_key.to_string(),
        })?;
        Ok(ResolvedParams {
            index,
            step,
            extra: self.extra.clone(),
        })
    }
}
