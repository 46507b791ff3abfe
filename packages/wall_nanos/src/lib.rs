#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Cheap wall-clock timestamps, expressed as nanoseconds since the Unix epoch.
//!
//! A [`WallClock`] reads the operating system wall clock exactly once, when it is created.
//! Every later timestamp is that origin plus the time elapsed on a low-overhead monotonic
//! clock, which makes capturing a timestamp much cheaper than asking the operating system
//! for the wall-clock time every time.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Trade-offs
//!
//! - Timestamps are monotonically non-decreasing for a given clock.
//! - Adjustments made to the system wall clock after the [`WallClock`] was created (e.g. by NTP)
//!   are not reflected, so the timestamps slowly drift away from the system wall clock over the
//!   lifetime of the clock. Create a new clock if you need to pick up such adjustments.
//! - On Linux the monotonic source is coarse (one scheduler tick, typically 1-4 ms), trading
//!   precision for efficiency. Other platforms use [`std::time::Instant`].
//!
//! # Example
//!
//! ```rust
//! use wall_nanos::WallClock;
//!
//! let clock = WallClock::new();
//!
//! let first = clock.now_nanos();
//! std::thread::sleep(std::time::Duration::from_millis(10));
//! let second = clock.now_nanos();
//!
//! assert!(second >= first);
//! println!("{first} -> {second} nanoseconds since the Unix epoch");
//! ```
//!
//! # Sharing between threads
//!
//! The clock never changes after creation, so a single instance can be queried from any
//! number of threads at the same time without synchronization:
//!
//! ```rust
//! use std::thread;
//!
//! use wall_nanos::WallClock;
//!
//! let clock = WallClock::new();
//!
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             let mut previous = clock.now_nanos();
//!
//!             for _ in 0..1000 {
//!                 let current = clock.now_nanos();
//!                 assert!(current >= previous);
//!                 previous = current;
//!             }
//!         });
//!     }
//! });
//! ```

mod pal;

mod error;
mod wall_clock;

pub use error::*;
pub use wall_clock::*;
