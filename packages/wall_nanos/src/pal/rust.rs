use std::time::{Duration, Instant, SystemTime};

use crate::pal::TimeSource;

/// Measures elapsed time with `std::time::Instant`, for targets without a cheaper monotonic
/// clock and for Miri.
#[derive(Debug)]
pub(crate) struct RustTimeSource {
    origin: SystemTime,
    epoch: Instant,
}

impl RustTimeSource {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
            origin: SystemTime::now(),
        }
    }
}

impl TimeSource for RustTimeSource {
    fn origin(&self) -> SystemTime {
        self.origin
    }

    #[inline]
    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }
}
