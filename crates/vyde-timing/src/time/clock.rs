use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{validate_rate, ClockConfig};
use crate::error::{Error, Result};

// Set while a clock is alive anywhere in the process.
static CLOCK_ALIVE: AtomicBool = AtomicBool::new(false);

/// Callback invoked with the new frame number after every tick.
pub type TickListener = Box<dyn FnMut(u64)>;

/// Discrete frame clock.
///
/// The frame counter starts at 0 and only ever increases, one frame per
/// [`tick`](Clock::tick). The rate is only used to turn seconds into frame
/// spans; there is no wall-clock pacing.
///
/// At most one `Clock` can be alive in the process. Constructing a second one,
/// from any thread, fails with [`Error::ClockAlreadyExists`]; dropping the live
/// clock frees the slot again.
pub struct Clock {
    frame: u64,
    rate: f64,
    listener: Option<TickListener>,
}

impl Clock {
    /// Creates the process clock at frame 0.
    pub fn new(config: ClockConfig) -> Result<Self> {
        config.validate()?;

        if CLOCK_ALIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::ClockAlreadyExists);
        }

        log::debug!("clock created at {} fps", config.rate);

        Ok(Self {
            frame: 0,
            rate: config.rate,
            listener: None,
        })
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<()> {
        validate_rate(rate)?;
        self.rate = rate;
        Ok(())
    }

    /// Converts seconds into a (possibly fractional) frame count.
    #[inline]
    pub fn seconds_to_frames(&self, seconds: f64) -> f64 {
        seconds * self.rate
    }

    /// Installs the tick listener, replacing any previous one.
    pub fn set_tick_listener<F>(&mut self, listener: F)
    where
        F: FnMut(u64) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_tick_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_tick_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Advances one frame, notifies the listener and returns the new frame.
    pub fn tick(&mut self) -> u64 {
        let frame = self.advance();
        self.notify(frame);
        frame
    }

    pub(crate) fn advance(&mut self) -> u64 {
        self.frame += 1;
        log::trace!("tick -> frame {}", self.frame);
        self.frame
    }

    pub(crate) fn notify(&mut self, frame: u64) {
        if let Some(listener) = self.listener.as_mut() {
            listener(frame);
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        CLOCK_ALIVE.store(false, Ordering::Release);
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("frame", &self.frame)
            .field("rate", &self.rate)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::error::ErrorKind;
    use crate::test_utils::clock_lock;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn starts_at_frame_zero() {
        let _lock = clock_lock();
        let clock = Clock::new(ClockConfig::default()).unwrap();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.rate(), 60.0);
    }

    #[test]
    fn second_clock_is_rejected() {
        let _lock = clock_lock();
        let _first = Clock::new(ClockConfig::default()).unwrap();
        let err = Clock::new(ClockConfig::default()).unwrap_err();
        assert_eq!(err, Error::ClockAlreadyExists);
        assert_eq!(err.kind(), ErrorKind::LifecycleViolation);
    }

    #[test]
    fn clock_on_another_thread_is_rejected() {
        let _lock = clock_lock();
        let _clock = Clock::new(ClockConfig::default()).unwrap();

        let err = std::thread::spawn(|| Clock::new(ClockConfig::default()).err())
            .join()
            .unwrap();
        assert_eq!(err, Some(Error::ClockAlreadyExists));
    }

    #[test]
    fn dropping_frees_the_slot() {
        let _lock = clock_lock();
        drop(Clock::new(ClockConfig::default()).unwrap());
        assert!(Clock::new(ClockConfig::default()).is_ok());
    }

    #[test]
    fn invalid_rate_does_not_claim_the_slot() {
        let _lock = clock_lock();
        let err = Clock::new(ClockConfig::default().with_rate(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert!(Clock::new(ClockConfig::default()).is_ok());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_increments_by_one() {
        let _lock = clock_lock();
        let mut clock = Clock::new(ClockConfig::default()).unwrap();
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn listener_sees_new_frame() {
        let _lock = clock_lock();
        let mut clock = Clock::new(ClockConfig::default()).unwrap();
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        clock.set_tick_listener(move |frame| sink.set(frame));

        clock.tick();
        clock.tick();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn last_listener_wins() {
        let _lock = clock_lock();
        let mut clock = Clock::new(ClockConfig::default()).unwrap();
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));

        let f = first.clone();
        clock.set_tick_listener(move |_| f.set(f.get() + 1));
        let s = second.clone();
        clock.set_tick_listener(move |_| s.set(s.get() + 1));

        clock.tick();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);

        clock.clear_tick_listener();
        clock.tick();
        assert_eq!(second.get(), 1);
        assert!(!clock.has_tick_listener());
    }

    // ── rate ──────────────────────────────────────────────────────────────

    #[test]
    fn seconds_to_frames_scales_by_rate() {
        let _lock = clock_lock();
        let mut clock = Clock::new(ClockConfig::default()).unwrap();
        assert!((clock.seconds_to_frames(0.3) - 18.0).abs() < 1e-9);

        clock.set_rate(24.0).unwrap();
        assert_eq!(clock.seconds_to_frames(2.0), 48.0);
    }

    #[test]
    fn set_rate_rejects_non_positive() {
        let _lock = clock_lock();
        let mut clock = Clock::new(ClockConfig::default()).unwrap();
        assert_eq!(clock.set_rate(-1.0).unwrap_err(), Error::InvalidRate(-1.0));
        assert_eq!(clock.rate(), 60.0);
    }
}
