use std::fmt::Debug;
use std::time::{Duration, SystemTime};

#[cfg(test)]
use crate::pal::MockTimeSource;
#[cfg(any(miri, not(target_os = "linux")))]
use crate::pal::RustTimeSource;
use crate::pal::TimeSource;
#[cfg(all(target_os = "linux", not(miri)))]
use crate::pal::TimeSourceImpl;

pub(crate) enum TimeSourceFacade {
    #[cfg(all(target_os = "linux", not(miri)))]
    Optimized(TimeSourceImpl),

    #[cfg(any(miri, not(target_os = "linux")))]
    Passthrough(RustTimeSource),

    #[cfg(test)]
    Mock(Box<MockTimeSource>),
}

impl TimeSourceFacade {
    /// Captures a new origin from the time source of the build target.
    pub(crate) fn real() -> Self {
        #[cfg(all(target_os = "linux", not(miri)))]
        {
            Self::Optimized(TimeSourceImpl::real())
        }

        #[cfg(any(miri, not(target_os = "linux")))]
        {
            Self::Passthrough(RustTimeSource::new())
        }
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(ts: MockTimeSource) -> Self {
        Self::Mock(Box::new(ts))
    }
}

impl TimeSource for TimeSourceFacade {
    fn origin(&self) -> SystemTime {
        match self {
            #[cfg(all(target_os = "linux", not(miri)))]
            Self::Optimized(ts) => ts.origin(),
            #[cfg(any(miri, not(target_os = "linux")))]
            Self::Passthrough(ts) => ts.origin(),
            #[cfg(test)]
            Self::Mock(ts) => ts.origin(),
        }
    }

    #[inline]
    fn elapsed(&self) -> Duration {
        match self {
            #[cfg(all(target_os = "linux", not(miri)))]
            Self::Optimized(ts) => ts.elapsed(),
            #[cfg(any(miri, not(target_os = "linux")))]
            Self::Passthrough(ts) => ts.elapsed(),
            #[cfg(test)]
            Self::Mock(ts) => ts.elapsed(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for TimeSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(all(target_os = "linux", not(miri)))]
            Self::Optimized(ts) => ts.fmt(f),
            #[cfg(any(miri, not(target_os = "linux")))]
            Self::Passthrough(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}
