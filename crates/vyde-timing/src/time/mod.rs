//! Time subsystem.
//!
//! Frame-counted, not wall-clock. Intended usage:
//! - one [`Timeline`] per scheduler thread, created explicitly at startup
//! - the host calls [`Timeline::tick`] once per presented frame
//! - animation code creates [`Duration`]s and drives them through
//!   [`Progress`] steps or [`Duration::run_to_completion`]

mod clock;
mod duration;
mod frames;
mod progress;
mod registry;
mod timeline;

pub use clock::{Clock, TickListener};
pub use duration::Duration;
pub use frames::IntoFrames;
pub use progress::{Mode, Progress, Steps};
pub use registry::Registry;
pub use timeline::Timeline;
