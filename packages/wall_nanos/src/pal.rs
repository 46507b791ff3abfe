mod abstractions;
mod facade;

pub(crate) use abstractions::*;
pub(crate) use facade::*;

// Linux has a cheap coarse monotonic clock. Elsewhere (and under Miri, which cannot make
// platform calls) we measure elapsed time with `std::time::Instant`.
#[cfg(all(target_os = "linux", not(miri)))]
mod linux;
#[cfg(all(target_os = "linux", not(miri)))]
pub(crate) use linux::*;

#[cfg(any(miri, not(target_os = "linux")))]
mod rust;
#[cfg(any(miri, not(target_os = "linux")))]
pub(crate) use rust::*;
