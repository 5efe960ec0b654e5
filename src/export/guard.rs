//! Re-entrancy guard for export actions.
//!
//! At most one job of a kind runs at a time. A second request while one is
//! active is dropped, not queued.

use parking_lot::Mutex;

/// In-flight marker for one kind of export job.
///
/// `T` records what is being processed (e.g. the requested format) so the
/// caller can show which control is busy.
#[derive(Debug)]
pub struct InFlight<T: Copy> {
    state: Mutex<Option<T>>,
}

impl<T: Copy> InFlight<T> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Mark a job as started, or return `None` if one is already running.
    ///
    /// The marker is cleared when the returned guard drops, on every exit
    /// path of the job (including early returns and panics).
    pub fn try_begin(&self, marker: T) -> Option<InFlightGuard<'_, T>> {
        let mut state = self.state.lock();
        if state.is_some() {
            return None;
        }
        *state = Some(marker);
        Some(InFlightGuard { flight: self })
    }

    /// What is currently being processed.
    pub fn current(&self) -> Option<T> {
        *self.state.lock()
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().is_some()
    }
}

impl<T: Copy> Default for InFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the owning [`InFlight`] on drop.
#[must_use = "the job is marked finished as soon as the guard drops"]
pub struct InFlightGuard<'a, T: Copy> {
    flight: &'a InFlight<T>,
}

impl<T: Copy> Drop for InFlightGuard<'_, T> {
    fn drop(&mut self) {
        self.flight.state.lock().take();
    }
}
