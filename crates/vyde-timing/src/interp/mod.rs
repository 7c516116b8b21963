//! Interpolation engine.
//!
//! Pure functions only: curves shape a progress value, easings pick which end
//! of the curve is slow, and [`interpolate`] blends any [`Interpolate`] value.
//!
//! Progress read from a [`Duration`](crate::time::Duration) counts down from
//! `1.0` to `0.0`, so feeding it straight in animates from `end` to `start`.

mod curve;
mod lerp;
mod track;

pub use curve::{Curve, Easing};
pub use lerp::{interpolate, lerp, Interpolate};
pub use track::{Keyframe, Track};
