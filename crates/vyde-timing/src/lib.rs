//! Frame-driven timing core.
//!
//! A [`Timeline`] owns the process frame clock and the registry of active
//! [`Duration`]s. Animation code either blocks on a duration (ticking the clock
//! itself) or steps it cooperatively while a host loop ticks once per frame,
//! and turns the duration's progress into values with the [`interp`] module.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`time`] | `Clock`, `Timeline`, `Duration`, `Registry`, `Progress` |
//! | [`interp`] | `Curve`, `Easing`, `interpolate`, `Track` |
//! | [`render`] | `TextRenderer` collaborator interface |
//! | [`config`] | `ClockConfig` |
//! | [`logging`] | `init_logging` |
//! | [`error`] | `Error`, `ErrorKind` |
//!
//! # Quick start
//!
//! ```rust
//! use vyde_timing::{interpolate, ClockConfig, Curve, Easing, Timeline};
//!
//! let mut timeline = Timeline::new(ClockConfig::default()).unwrap();
//! let fade = timeline.seconds(0.3).unwrap();
//!
//! let mut steps = fade.blocking();
//! while let Some(d) = steps.step(&mut timeline) {
//!     let _opacity = interpolate(0.0, 1.0, d.progress(), Curve::Cubic, Easing::Out);
//! }
//! assert_eq!(timeline.frame(), 18);
//! ```

pub mod config;
pub mod error;
pub mod interp;
pub mod logging;
pub mod render;
pub mod time;

#[cfg(test)]
mod test_utils;

pub use config::ClockConfig;
pub use error::{Error, ErrorKind, Result};
pub use interp::{interpolate, lerp, Curve, Easing, Interpolate, Keyframe, Track};
pub use time::{Clock, Duration, IntoFrames, Mode, Progress, Registry, Timeline};
