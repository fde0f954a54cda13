//! Transform synthesis
//!
//! Animators return directional components; this module turns them into the
//! value of a CSS `transform` property. Clause order is fixed:
//!
//! `scale` → `rotateX`/`rotateY`/`rotateZ` → `rotate` → `translate3d`
//!
//! When nothing is set the result is `translateZ(0px)`, which keeps the
//! element on its own compositing layer.

use motif_core::format_number;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Transform used when an animator sets no components
pub const NEUTRAL_TRANSFORM: &str = "translateZ(0px)";

/// Per-axis values; missing axes read as zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axes {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Axes {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn z(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::default()
        }
    }
}

/// Directional transform components produced by an animator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParts {
    pub scale: Option<f64>,
    /// Single-axis rotation in degrees
    pub rotate: Option<f64>,
    /// Per-axis rotation in degrees
    pub rotate3d: Option<Axes>,
    /// Translation in pixels
    pub translate: Option<Axes>,
}

impl TransformParts {
    pub fn is_empty(&self) -> bool {
        self.scale.is_none()
            && self.rotate.is_none()
            && self.rotate3d.is_none()
            && self.translate.is_none()
    }

    /// Render the components as a CSS transform value
    pub fn to_css(&self) -> String {
        let mut out = String::new();

        if let Some(scale) = self.scale {
            let _ = write!(out, "scale({}) ", format_number(scale));
        }

        if let Some(axes) = self.rotate3d {
            // Each axis is independent; zero rotations are left out
            for (func, value) in [("rotateX", axes.x), ("rotateY", axes.y), ("rotateZ", axes.z)] {
                if let Some(deg) = value.filter(|v| *v != 0.0) {
                    let _ = write!(out, "{func}({}deg) ", format_number(deg));
                }
            }
        }

        if let Some(rotate) = self.rotate {
            let _ = write!(out, "rotate({}deg) ", format_number(rotate));
        }

        if let Some(t) = self.translate {
            let _ = write!(
                out,
                "translate3d({}px, {}px, {}px)",
                format_number(t.x.unwrap_or(0.0)),
                format_number(t.y.unwrap_or(0.0)),
                format_number(t.z.unwrap_or(0.0)),
            );
        }

        if out.is_empty() {
            NEUTRAL_TRANSFORM.to_string()
        } else {
            out
        }
    }
}
