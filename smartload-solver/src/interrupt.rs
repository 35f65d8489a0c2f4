//! Cooperative cancellation for long searches.
//!
//! Searches call [`Interrupt::tick`] once per node or subset. Every
//! `interval` ticks the caller's stop flag and the deadline are consulted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use smartload_core::OptimizeError;

#[derive(Debug)]
pub(crate) struct Interrupt<'a> {
    stop_flag: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
    interval: u32,
    countdown: u32,
}

impl<'a> Interrupt<'a> {
    pub(crate) fn new(
        stop_flag: Option<&'a AtomicBool>,
        time_limit: Option<Duration>,
        interval: u32,
    ) -> Self {
        let interval = interval.max(1);
        Self {
            stop_flag,
            deadline: time_limit.and_then(|limit| Instant::now().checked_add(limit)),
            interval,
            countdown: interval,
        }
    }

    /// An interrupt that never fires.
    #[cfg(test)]
    pub(crate) fn never() -> Self {
        Self::new(None, None, u32::MAX)
    }

    /// Check the stop flag and deadline immediately.
    pub(crate) fn check(&self) -> Result<(), OptimizeError> {
        let stopped = self
            .stop_flag
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        let expired = self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline);
        if stopped || expired {
            Err(OptimizeError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Count one unit of work, checking for cancellation every `interval`.
    pub(crate) fn tick(&mut self) -> Result<(), OptimizeError> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = self.interval;
            return self.check();
        }
        Ok(())
    }
}
