use std::fmt::Debug;
use std::time::SystemTime;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Nanoseconds on `CLOCK_MONOTONIC_COARSE`, counted from an unspecified starting point.
    fn clock_gettime_nanos(&self) -> u128;

    // Rust does not (yet) have a clock abstraction, so without this we have nothing to mock.
    // This is just a mockable wrapper around `SystemTime::now()`.
    fn wall_clock(&self) -> SystemTime;
}
