use std::fmt::Debug;
use std::time::{Duration, SystemTime};

/// A pairing of a wall-clock origin with a monotonic reference point, both captured when the
/// time source is created.
///
/// Reads happen through a shared reference from any number of threads at once.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send + Sync + 'static {
    /// The wall-clock time captured when the time source was created.
    fn origin(&self) -> SystemTime;

    /// Time elapsed since the time source was created, measured on a monotonic clock.
    fn elapsed(&self) -> Duration;
}
