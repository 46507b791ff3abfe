//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `wall_nanos` package `README.md`.

use std::thread;
use std::time::Duration;

use wall_nanos::WallClock;

fn main() {
    // Reads the system wall clock once; every later timestamp is derived from a monotonic clock.
    let clock = WallClock::new();

    let start = clock.now_nanos();

    // Simulate some work
    thread::sleep(Duration::from_millis(10));

    let end = clock.now_nanos();
    println!("Work started at {start} and ended at {end} (ns since Unix epoch)");

    // The clock never changes after creation, so threads can share it freely.
    thread::scope(|s| {
        for worker in 0..4 {
            let clock = &clock;

            s.spawn(move || {
                let mut timestamps = Vec::with_capacity(1000);
                for _ in 0..1000 {
                    timestamps.push(clock.now_nanos());
                }

                println!("Worker {worker} collected {} timestamps", timestamps.len());
            });
        }
    });
}
