use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::OriginOutOfRangeError;
use crate::pal::{TimeSource, TimeSourceFacade};

/// A clock that efficiently provides the current wall-clock time as nanoseconds since the
/// Unix epoch.
///
/// The clock reads the operating system wall clock once, when it is created. Every timestamp
/// after that is derived by adding the time elapsed on a cheap monotonic clock to that origin,
/// which is considerably faster than reading the wall clock on every call.
///
/// The timestamps are monotonically non-decreasing for a given clock. They do not follow
/// adjustments made to the system wall clock after the clock was created (e.g. as part of clock
/// synchronization), so they drift away from the system wall clock by the sum of any such
/// adjustments. The monotonic clock is also coarse, so consecutive timestamps may be equal and
/// may lag behind the system wall clock by a few milliseconds.
///
/// This makes the clock suitable for rapid timestamping, such as in logging and metrics, where
/// you may be capturing 100 000 timestamps per second but do not care about the exact
/// microsecond.
///
/// The clock is immutable after creation and can be shared between any number of threads.
/// Independently created clocks share no state.
///
/// # Examples
///
/// ```rust
/// use wall_nanos::WallClock;
///
/// let clock = WallClock::new();
///
/// let timestamp = clock.now_nanos();
/// assert!(timestamp >= clock.origin_nanos());
/// ```
#[derive(Debug)]
pub struct WallClock {
    origin_nanos: i64,
    time_source: TimeSourceFacade,
}

impl WallClock {
    /// Creates a clock anchored to the current system wall-clock time.
    ///
    /// # Panics
    ///
    /// Panics if the platform time source is unavailable or if the system wall clock is
    /// outside the range of `i64` nanoseconds since the Unix epoch (roughly the years 1677
    /// to 2262). Neither is possible on a healthy system.
    #[must_use]
    pub fn new() -> Self {
        Self::from_time_source(TimeSourceFacade::real())
    }

    /// Creates a clock anchored to the given wall-clock time instead of the current one.
    ///
    /// The returned clock behaves as if `origin` had been the wall-clock time at the moment of
    /// creation: each timestamp is `origin` plus the time elapsed since this call.
    ///
    /// # Errors
    ///
    /// Returns an error if `origin` is outside the range of `i64` nanoseconds since the Unix
    /// epoch (roughly the years 1677 to 2262).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::{Duration, SystemTime};
    ///
    /// use wall_nanos::WallClock;
    ///
    /// let a_day_ago = SystemTime::now() - Duration::from_secs(24 * 60 * 60);
    /// let clock = WallClock::with_origin(a_day_ago).unwrap();
    ///
    /// let now = clock.now_nanos();
    /// assert!(now >= clock.origin_nanos());
    /// ```
    pub fn with_origin(origin: SystemTime) -> Result<Self, OriginOutOfRangeError> {
        Self::from_time_source_with_origin(TimeSourceFacade::real(), origin)
    }

    pub(crate) fn from_time_source(time_source: TimeSourceFacade) -> Self {
        let origin_nanos = unix_nanos(time_source.origin()).expect(
            "system wall clock is outside the range of i64 nanoseconds since the Unix epoch",
        );

        debug!(origin_nanos, explicit_origin = false, "wall clock created");

        Self {
            origin_nanos,
            time_source,
        }
    }

    pub(crate) fn from_time_source_with_origin(
        time_source: TimeSourceFacade,
        origin: SystemTime,
    ) -> Result<Self, OriginOutOfRangeError> {
        let origin_nanos =
            unix_nanos(origin).ok_or_else(|| OriginOutOfRangeError::new(origin))?;

        debug!(origin_nanos, explicit_origin = true, "wall clock created");

        Ok(Self {
            origin_nanos,
            time_source,
        })
    }

    /// Returns the current wall-clock time as nanoseconds since the Unix epoch.
    ///
    /// The value is the origin of the clock plus the time elapsed since the clock was created,
    /// saturating at `i64::MAX`.
    #[must_use]
    #[inline]
    pub fn now_nanos(&self) -> i64 {
        let elapsed_nanos =
            i64::try_from(self.time_source.elapsed().as_nanos()).unwrap_or(i64::MAX);

        self.origin_nanos.saturating_add(elapsed_nanos)
    }

    /// Returns the wall-clock time the clock was anchored to, as nanoseconds since the Unix
    /// epoch.
    ///
    /// Negative values are before the Unix epoch.
    #[must_use]
    pub const fn origin_nanos(&self) -> i64 {
        self.origin_nanos
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed nanoseconds since the Unix epoch, if representable as `i64`.
fn unix_nanos(time: SystemTime) -> Option<i64> {
    let nanos = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i128::try_from(after.as_nanos()).ok()?,
        Err(before) => i128::try_from(before.duration().as_nanos())
            .ok()?
            .checked_neg()?,
    };

    i64::try_from(nanos).ok()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use mockall::Sequence;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::MockTimeSource;

    assert_impl_all!(WallClock: Send, Sync);

    const ORIGIN_SECS: u64 = 1_700_000_000;
    const ORIGIN_NANOS: i64 = 1_700_000_000_000_000_000;
    // i64::MAX
    const MAX_NANOS: u64 = 9_223_372_036_854_775_807;

    #[test]
    fn now_is_origin_plus_elapsed() {
        let mut time_source = MockTimeSource::new();

        time_source
            .expect_origin()
            .once()
            .return_const(UNIX_EPOCH + Duration::from_secs(ORIGIN_SECS));

        let mut seq = Sequence::new();

        time_source
            .expect_elapsed()
            .once()
            .in_sequence(&mut seq)
            .return_const(Duration::ZERO);

        time_source
            .expect_elapsed()
            .once()
            .in_sequence(&mut seq)
            .return_const(Duration::from_millis(1500));

        let clock = WallClock::from_time_source(time_source.into());

        assert_eq!(clock.origin_nanos(), ORIGIN_NANOS);
        assert_eq!(clock.now_nanos(), ORIGIN_NANOS);
        assert_eq!(clock.now_nanos(), ORIGIN_NANOS + 1_500_000_000);
    }

    #[test]
    fn explicit_origin_replaces_platform_origin() {
        let mut time_source = MockTimeSource::new();

        time_source.expect_origin().never();
        time_source
            .expect_elapsed()
            .once()
            .return_const(Duration::from_nanos(42));

        let clock = WallClock::from_time_source_with_origin(
            time_source.into(),
            UNIX_EPOCH + Duration::from_secs(ORIGIN_SECS),
        )
        .unwrap();

        assert_eq!(clock.origin_nanos(), ORIGIN_NANOS);
        assert_eq!(clock.now_nanos(), ORIGIN_NANOS + 42);
    }

    #[test]
    fn explicit_origin_before_epoch_is_negative() {
        let mut time_source = MockTimeSource::new();

        time_source
            .expect_elapsed()
            .once()
            .return_const(Duration::from_secs(1));

        let clock = WallClock::from_time_source_with_origin(
            time_source.into(),
            UNIX_EPOCH - Duration::from_secs(10),
        )
        .unwrap();

        assert_eq!(clock.origin_nanos(), -10_000_000_000);
        assert_eq!(clock.now_nanos(), -9_000_000_000);
    }

    #[test]
    fn explicit_origin_out_of_range_is_rejected() {
        // The time source is never read when the origin is rejected.
        let time_source = MockTimeSource::new();

        let too_late = UNIX_EPOCH + Duration::from_secs(300 * 365 * 24 * 60 * 60);

        let error =
            WallClock::from_time_source_with_origin(time_source.into(), too_late).unwrap_err();
        assert_eq!(error.origin(), too_late);
    }

    #[test]
    fn now_saturates_instead_of_overflowing() {
        let mut time_source = MockTimeSource::new();

        time_source
            .expect_elapsed()
            .once()
            .return_const(Duration::from_secs(10));

        let almost_the_end = UNIX_EPOCH + Duration::from_nanos(MAX_NANOS - 1);

        let clock =
            WallClock::from_time_source_with_origin(time_source.into(), almost_the_end).unwrap();

        assert_eq!(clock.now_nanos(), i64::MAX);
    }

    #[test]
    fn unix_nanos_edges() {
        assert_eq!(unix_nanos(UNIX_EPOCH), Some(0));
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(1)), Some(1));
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_nanos(1)), Some(-1));
        assert_eq!(
            unix_nanos(UNIX_EPOCH + Duration::from_nanos(MAX_NANOS)),
            Some(i64::MAX)
        );
        assert_eq!(
            unix_nanos(UNIX_EPOCH + Duration::from_nanos(MAX_NANOS + 1)),
            None
        );
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    fn now_is_approximately_now() {
        let clock = WallClock::new();

        let expected = unix_nanos(SystemTime::now()).unwrap();
        let actual = clock.now_nanos();

        assert!((actual - expected).abs() < 100_000_000);
    }
}
