use std::time::SystemTime;

use thiserror::Error;

/// The wall-clock origin given to [`WallClock::with_origin()`][crate::WallClock::with_origin]
/// cannot be represented as a signed 64-bit count of nanoseconds since the Unix epoch.
///
/// The representable range is roughly the years 1677 to 2262.
#[derive(Debug, Error)]
#[error("wall-clock origin {origin:?} is outside the range of i64 nanoseconds since the Unix epoch")]
pub struct OriginOutOfRangeError {
    origin: SystemTime,
}

impl OriginOutOfRangeError {
    pub(crate) const fn new(origin: SystemTime) -> Self {
        Self { origin }
    }

    /// The origin that was rejected.
    #[must_use]
    pub const fn origin(&self) -> SystemTime {
        self.origin
    }
}
