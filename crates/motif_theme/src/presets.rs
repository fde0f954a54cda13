//! Preset animators
//!
//! Each preset is a pure function of `(index, step, extra)`. The distance
//! `index - step` is how far an element is from being the active one: `0`
//! when it is in place, `1` when it is one position ahead, `-1` when it has
//! been passed.
//!
//! Presets read these optional extras:
//!
//! | extra     | used by                                   | default |
//! |-----------|-------------------------------------------|---------|
//! | `width`   | `move_to_right`, `move_to_left`, `parallax` | 100   |
//! | `degrees` | `rotate`                                  | 90      |
//! | `factor`  | `parallax` (speed of passed elements)     | 0.3     |
//! | `shrink`  | `scale` (scale lost per position)         | 0.2     |

use crate::registry::AnimatorRegistry;
use motif_animation::{AnimatorOutput, Axes};
use motif_core::{Props, PropsExt};

const DEFAULT_WIDTH: f64 = 100.0;

fn distance(index: f64, step: f64) -> f64 {
    index - step
}

/// Opacity fades out with distance from the active position
pub fn fade(index: f64, step: f64, _extra: &Props) -> AnimatorOutput {
    let opacity = (1.0 - distance(index, step).abs()).clamp(0.0, 1.0);
    AnimatorOutput::new().style("opacity", opacity)
}

/// Shrinks and fades with distance
pub fn scale(index: f64, step: f64, extra: &Props) -> AnimatorOutput {
    let d = distance(index, step).abs().min(1.0);
    let shrink = extra.number_or("shrink", 0.2);
    AnimatorOutput::new()
        .scale(1.0 - shrink * d)
        .style("opacity", 1.0 - d)
}

/// Elements ahead wait to the right and slide in leftwards
pub fn move_to_right(index: f64, step: f64, extra: &Props) -> AnimatorOutput {
    let width = extra.number_or("width", DEFAULT_WIDTH);
    AnimatorOutput::new().translate(Axes::x(distance(index, step) * width))
}

/// Elements ahead wait to the left and slide in rightwards
pub fn move_to_left(index: f64, step: f64, extra: &Props) -> AnimatorOutput {
    let width = extra.number_or("width", DEFAULT_WIDTH);
    AnimatorOutput::new().translate(Axes::x(-distance(index, step) * width))
}

/// Like `move_to_right`, but passed elements move slower than incoming ones
pub fn parallax(index: f64, step: f64, extra: &Props) -> AnimatorOutput {
    let width = extra.number_or("width", DEFAULT_WIDTH);
    let d = distance(index, step);
    let x = if d < 0.0 {
        d * width * extra.number_or("factor", 0.3)
    } else {
        d * width
    };
    AnimatorOutput::new().translate(Axes::x(x))
}

/// Rotates by `degrees` per position of distance
pub fn rotate(index: f64, step: f64, extra: &Props) -> AnimatorOutput {
    let degrees = extra.number_or("degrees", 90.0);
    AnimatorOutput::new().rotate(distance(index, step) * degrees)
}

/// Flips around the Y axis, hiding the back face
pub fn flip(index: f64, step: f64, _extra: &Props) -> AnimatorOutput {
    let d = distance(index, step).clamp(-1.0, 1.0);
    AnimatorOutput::new()
        .rotate3d(Axes::y(d * 180.0))
        .style("backface-visibility", "hidden")
}

/// Register every preset under its function name
pub fn register_presets(registry: &mut AnimatorRegistry) {
    registry.register_fn("fade", fade);
    registry.register_fn("scale", scale);
    registry.register_fn("move_to_right", move_to_right);
    registry.register_fn("move_to_left", move_to_left);
    registry.register_fn("parallax", parallax);
    registry.register_fn("rotate", rotate);
    registry.register_fn("flip", flip);
}
