use std::time::{Duration, SystemTime};

use crate::pal::TimeSource;
use crate::pal::linux::{Bindings, BuildTargetBindings};

/// Measures elapsed time on the coarse monotonic clock exposed by `B`.
#[derive(Debug)]
pub(crate) struct TimeSourceImpl<B = BuildTargetBindings>
where
    B: Bindings,
{
    origin: SystemTime,

    // Reading of the coarse monotonic clock taken together with `origin`.
    platform_epoch: u128,

    bindings: B,
}

impl TimeSourceImpl {
    pub(crate) fn real() -> Self {
        Self::new(BuildTargetBindings)
    }
}

impl<B> TimeSourceImpl<B>
where
    B: Bindings,
{
    pub(crate) fn new(bindings: B) -> Self {
        let platform_epoch = bindings.clock_gettime_nanos();
        let origin = bindings.wall_clock();

        Self {
            origin,
            platform_epoch,
            bindings,
        }
    }
}

impl<B> TimeSource for TimeSourceImpl<B>
where
    B: Bindings,
{
    fn origin(&self) -> SystemTime {
        self.origin
    }

    #[inline]
    fn elapsed(&self) -> Duration {
        let elapsed_nanos = self
            .bindings
            .clock_gettime_nanos()
            .saturating_sub(self.platform_epoch);

        Duration::from_nanos(
            u64::try_from(elapsed_nanos)
                .expect("unrealistically long duration, never going to happen with real clocks"),
        )
    }
}
