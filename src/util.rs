//! Timing helpers for diagnostics.

use std::time::{Duration, Instant};

/// RAII timer that logs the elapsed time of a labelled phase on drop.
///
/// # Example
/// ```ignore
/// let _t = Timed::debug("neighbor audit");
/// // ... do work ...
/// // logs "neighbor audit: 1.234s" when _t is dropped
/// ```
pub struct Timed {
    label: &'static str,
    start: Instant,
    level: log::Level,
}

impl Timed {
    pub fn new(label: &'static str, level: log::Level) -> Self {
        log::trace!("{}...", label);
        Self {
            label,
            start: Instant::now(),
            level,
        }
    }

    pub fn debug(label: &'static str) -> Self {
        Self::new(label, log::Level::Debug)
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.label, self.elapsed());
    }
}
