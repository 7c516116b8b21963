use crate::error::Result;

use super::duration::Duration;

/// Insertion-ordered set of active durations.
///
/// Invariant: every active duration created on the owning timeline is present
/// exactly once; inactive durations are absent.
#[derive(Debug, Default)]
pub struct Registry {
    active: Vec<Duration>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, duration: &Duration) -> bool {
        self.active.iter().any(|d| d.same(duration))
    }

    /// Active durations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Duration> {
        self.active.iter()
    }

    pub(crate) fn register(&mut self, duration: Duration) {
        debug_assert!(duration.is_active());
        self.active.push(duration);
    }

    /// Brings every active duration up to `frame` and drops the expired ones.
    ///
    /// Works on a snapshot taken before the first update so removals cannot
    /// disturb the walk. Returns the number of durations that expired.
    pub(crate) fn update(&mut self, frame: u64) -> usize {
        let snapshot = self.active.clone();
        let mut expired = 0;

        for duration in &snapshot {
            match duration.update(frame) {
                Ok(true) => expired += 1,
                Ok(false) => {}
                Err(err) => log::error!("registry held an ended duration: {err}"),
            }
        }

        self.active.retain(Duration::is_active);
        expired
    }

    /// Cancels `duration` and removes it.
    pub(crate) fn cancel(&mut self, duration: &Duration) -> Result<()> {
        duration.cancel()?;
        self.active.retain(|d| !d.same(duration));
        log::debug!("duration of {} frames cancelled", duration.span());
        Ok(())
    }
}

impl Drop for Registry {
    // Durations outliving their timeline would otherwise stay "active" forever
    // with nothing left to advance them.
    fn drop(&mut self) {
        for duration in self.active.drain(..) {
            let _ = duration.cancel();
        }
    }
}
