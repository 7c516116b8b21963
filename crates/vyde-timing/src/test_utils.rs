//! Shared test utilities.
//!
//! Only one clock may be alive in the process, while the test harness runs
//! tests in parallel. Every test that builds a clock holds [`clock_lock`].

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

use crate::config::ClockConfig;
use crate::time::Timeline;

static CLOCK_LOCK: Mutex<()> = Mutex::new(());

/// Serializes clock construction across tests. A failed test poisons the
/// mutex; the next one carries on regardless.
pub fn clock_lock() -> MutexGuard<'static, ()> {
    CLOCK_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Default timeline that keeps [`clock_lock`] held for its whole life.
pub struct TestTimeline {
    // Field order matters: the timeline (and its clock) drops before the lock.
    timeline: Timeline,
    _lock: MutexGuard<'static, ()>,
}

impl Deref for TestTimeline {
    type Target = Timeline;

    fn deref(&self) -> &Timeline {
        &self.timeline
    }
}

impl DerefMut for TestTimeline {
    fn deref_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }
}

pub fn timeline() -> TestTimeline {
    let lock = clock_lock();
    TestTimeline {
        timeline: Timeline::new(ClockConfig::default()).unwrap(),
        _lock: lock,
    }
}
