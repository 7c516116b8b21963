//! Render collaborator interface.
//!
//! The timing core never draws. Animation code computes positions and hands
//! them to a [`TextRenderer`]; what that renderer does is its own business.

mod text;

pub use text::{HAlign, LogRenderer, TextParams, TextRenderer, VAlign};
