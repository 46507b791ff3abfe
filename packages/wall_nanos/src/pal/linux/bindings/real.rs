use std::time::SystemTime;
use std::{io, mem};

use libc::{CLOCK_MONOTONIC_COARSE, timespec};

use crate::pal::linux::Bindings;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    /// Uses `CLOCK_MONOTONIC_COARSE`, which is served from the vDSO without a syscall and is
    /// cheaper than both `CLOCK_MONOTONIC` and `CLOCK_REALTIME` at the cost of resolution
    /// (one scheduler tick, typically 1-4 ms).
    #[inline]
    fn clock_gettime_nanos(&self) -> u128 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC_COARSE, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        let secs = u128::try_from(ts.tv_sec).expect("monotonic clock is never negative");
        let nanos = u128::try_from(ts.tv_nsec).expect("monotonic clock is never negative");

        secs.saturating_mul(NANOS_PER_SEC).saturating_add(nanos)
    }

    fn wall_clock(&self) -> SystemTime {
        SystemTime::now()
    }
}
