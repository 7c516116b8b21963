use std::cell::RefCell;
use std::iter::FusedIterator;
use std::rc::Weak;

use super::duration::{Duration, DurationState};
use super::timeline::Timeline;

/// How a [`Progress`] relates to the clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Each step ticks the clock once, then yields the duration.
    Blocking,
    /// Steps never tick; some other driver advances the clock between steps.
    Cooperative,
}

/// Explicit step machine over one [`Duration`].
///
/// Call [`step`](Progress::step) once per frame of work. It yields the
/// duration (to read [`progress`](Duration::progress) from) until the
/// sequence ends, after which it keeps returning `None`.
///
/// - **Blocking**: ends as soon as the duration is inactive, without ticking.
///   Otherwise ticks once and yields, so a fresh duration yields `ceil(span)`
///   times.
/// - **Cooperative**: yields while the duration is active, i.e. until the
///   registry update that brings `elapsed` up to the span. A fresh duration
///   pumped once per step yields `ceil(span)` times, ending before the frame
///   at progress `0.0`.
///
/// In both modes an expired, cancelled or dropped duration ends the sequence
/// on the next step. Only a weak reference is held, and whether the caller
/// keeps its own handle does not change the length of the sequence.
#[derive(Debug, Clone)]
pub struct Progress {
    target: Weak<RefCell<DurationState>>,
    mode: Mode,
    done: bool,
}

impl Progress {
    pub(crate) fn new(duration: &Duration, mode: Mode) -> Self {
        Self {
            target: duration.downgrade(),
            mode,
            done: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self, timeline: &mut Timeline) -> Option<Duration> {
        if self.done {
            return None;
        }

        let Some(duration) = self.target.upgrade().map(Duration::from_state) else {
            self.done = true;
            return None;
        };

        let next = match self.mode {
            Mode::Blocking => {
                if duration.is_active() {
                    timeline.tick();
                    Some(duration)
                } else {
                    None
                }
            }
            Mode::Cooperative => duration.is_active().then_some(duration),
        };

        if next.is_none() {
            self.done = true;
        }
        next
    }
}

/// Borrowing iterator over a blocking [`Progress`].
///
/// Holds the timeline for its whole lifetime, so it is only offered for the
/// blocking mode where the iterator itself drives the clock.
#[derive(Debug)]
pub struct Steps<'t> {
    progress: Progress,
    timeline: &'t mut Timeline,
}

impl<'t> Steps<'t> {
    pub(crate) fn new(progress: Progress, timeline: &'t mut Timeline) -> Self {
        debug_assert_eq!(progress.mode(), Mode::Blocking);
        Self { progress, timeline }
    }
}

impl Iterator for Steps<'_> {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        self.progress.step(self.timeline)
    }
}

impl FusedIterator for Steps<'_> {}
