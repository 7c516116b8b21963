use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};

use super::progress::{Mode, Progress, Steps};
use super::timeline::Timeline;

#[derive(Debug)]
pub(crate) struct DurationState {
    span: f64,
    anchor_frame: u64,
    elapsed: u64,
    active: bool,
    cancelled: bool,
}

/// A span of frames anchored at the clock frame it was created on.
///
/// `Duration` is a cheap handle; clones share the same state. While active it
/// is also held by the timeline's [`Registry`](super::Registry), which
/// refreshes the elapsed count on every tick. Expiry (elapsed reaches the
/// span) and cancellation are terminal.
#[derive(Clone)]
pub struct Duration {
    state: Rc<RefCell<DurationState>>,
}

impl Duration {
    pub(crate) fn new(span: f64, anchor_frame: u64) -> Result<Self> {
        if !(span.is_finite() && span > 0.0) {
            return Err(Error::InvalidSpan(span));
        }

        Ok(Self {
            state: Rc::new(RefCell::new(DurationState {
                span,
                anchor_frame,
                elapsed: 0,
                active: true,
                cancelled: false,
            })),
        })
    }

    pub(crate) fn from_state(state: Rc<RefCell<DurationState>>) -> Self {
        Self { state }
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<DurationState>> {
        Rc::downgrade(&self.state)
    }

    /// Span length in frames.
    #[inline]
    pub fn span(&self) -> f64 {
        self.state.borrow().span
    }

    /// Clock frame captured at creation.
    #[inline]
    pub fn anchor_frame(&self) -> u64 {
        self.state.borrow().anchor_frame
    }

    /// Frames elapsed since the anchor, as of the last registry update.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.state.borrow().elapsed
    }

    /// `span - elapsed`; negative once a fractional span has been overrun.
    #[inline]
    pub fn remaining(&self) -> f64 {
        let state = self.state.borrow();
        state.span - state.elapsed as f64
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    /// True when the duration ended through [`deactivate`](Self::deactivate)
    /// rather than by running out.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    /// Remaining fraction of the span: `1.0` at creation, `0.0` at expiry.
    ///
    /// Note the direction: this counts *down*. Interpolations driven by it run
    /// from their `end` value towards their `start` value.
    pub fn progress(&self) -> f64 {
        self.remaining() / self.span()
    }

    /// Returns true when both handles refer to the same duration.
    pub fn same(&self, other: &Duration) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Recomputes the elapsed count for `frame`; returns whether it expired.
    pub(crate) fn update(&self, frame: u64) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        if !state.active {
            return Err(Error::DurationInactive);
        }

        state.elapsed = frame.saturating_sub(state.anchor_frame);
        if state.elapsed as f64 >= state.span {
            state.active = false;
            log::debug!(
                "duration of {} frames expired at frame {frame}",
                state.span
            );
            return Ok(true);
        }
        Ok(false)
    }

    /// Marks the duration as cancelled. Registry bookkeeping is the caller's.
    pub(crate) fn cancel(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.active {
            return Err(Error::DurationInactive);
        }
        state.active = false;
        state.cancelled = true;
        Ok(())
    }

    /// Ticks `timeline` until this duration is no longer active.
    ///
    /// Returns the number of frames that elapsed during the call; `0` if the
    /// duration had already ended.
    pub fn run_to_completion(&self, timeline: &mut Timeline) -> u64 {
        let start = self.elapsed();
        while self.is_active() {
            timeline.tick();
        }
        self.elapsed() - start
    }

    /// Ends the duration early and removes it from the registry.
    pub fn deactivate(&self, timeline: &mut Timeline) -> Result<()> {
        timeline.deactivate(self)
    }

    /// Step-driven progress that never ticks the clock.
    pub fn cooperative(&self) -> Progress {
        Progress::new(self, Mode::Cooperative)
    }

    /// Step-driven progress that ticks the clock once per step.
    pub fn blocking(&self) -> Progress {
        Progress::new(self, Mode::Blocking)
    }

    /// Blocking progress as a borrowing iterator over `timeline`.
    pub fn frames<'t>(&self, timeline: &'t mut Timeline) -> Steps<'t> {
        Steps::new(self.blocking(), timeline)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Duration")
            .field("span", &state.span)
            .field("anchor_frame", &state.anchor_frame)
            .field("elapsed", &state.elapsed)
            .field("active", &state.active)
            .field("cancelled", &state.cancelled)
            .finish()
    }
}
