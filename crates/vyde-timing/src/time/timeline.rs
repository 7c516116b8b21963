use crate::config::ClockConfig;
use crate::error::Result;

use super::clock::Clock;
use super::duration::Duration;
use super::frames::IntoFrames;
use super::registry::Registry;

/// Scheduling context: the process [`Clock`] plus the [`Registry`] of
/// durations it drives.
///
/// Everything that reads or advances time takes the timeline explicitly. The
/// clock is only reachable immutably from outside so that every tick goes
/// through [`Timeline::tick`] and keeps the registry in lock-step.
#[derive(Debug)]
pub struct Timeline {
    clock: Clock,
    registry: Registry,
}

impl Timeline {
    pub fn new(config: ClockConfig) -> Result<Self> {
        Ok(Self {
            clock: Clock::new(config)?,
            registry: Registry::default(),
        })
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    #[inline]
    pub fn seconds_to_frames(&self, seconds: f64) -> f64 {
        self.clock.seconds_to_frames(seconds)
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<()> {
        self.clock.set_rate(rate)
    }

    /// Installs the single tick listener. It runs after the registry update,
    /// so durations are already current when it is called.
    pub fn set_tick_listener<F>(&mut self, listener: F)
    where
        F: FnMut(u64) + 'static,
    {
        self.clock.set_tick_listener(listener);
    }

    pub fn clear_tick_listener(&mut self) {
        self.clock.clear_tick_listener();
    }

    /// Advances one frame and returns the new frame number.
    pub fn tick(&mut self) -> u64 {
        let frame = self.clock.advance();
        self.registry.update(frame);
        self.clock.notify(frame);
        frame
    }

    /// Ticks `frames` times; returns the resulting frame number.
    pub fn advance(&mut self, frames: u64) -> u64 {
        for _ in 0..frames {
            self.tick();
        }
        self.frame()
    }

    /// Creates and registers a duration spanning `frames` frames.
    pub fn duration(&mut self, frames: f64) -> Result<Duration> {
        let duration = Duration::new(frames, self.frame())?;
        log::debug!(
            "duration of {frames} frames registered at frame {}",
            duration.anchor_frame()
        );
        self.registry.register(duration.clone());
        Ok(duration)
    }

    /// Creates a duration lasting `seconds` at the current rate.
    pub fn seconds(&mut self, seconds: f64) -> Result<Duration> {
        self.duration(self.seconds_to_frames(seconds))
    }

    /// Creates a duration from anything convertible into frames.
    pub fn duration_from<T: IntoFrames>(&mut self, length: T) -> Result<Duration> {
        self.duration(length.into_frames(self.clock.rate()))
    }

    /// Ends `duration` early.
    pub fn deactivate(&mut self, duration: &Duration) -> Result<()> {
        self.registry.cancel(duration)
    }
}
