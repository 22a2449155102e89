//! Embassy time binding.
//!
//! The core state machines take time as a plain `u32` millisecond stamp;
//! this is the single place the firmware reads the Embassy clock and narrows
//! it to that contract.

use embassy_time::Instant;

/// Milliseconds since boot from the Embassy time driver.
///
/// Truncated to `u32`, wrapping roughly every 49.7 days; callers compare
/// stamps with wrapping subtraction, never directly.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
