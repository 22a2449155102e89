//! Wrapping millisecond time arithmetic.
//!
//! Every timestamp in the pipeline is a `u32` millisecond count from a
//! free-running monotonic counter that wraps after about 49.7 days. Elapsed
//! time always goes through [`elapsed_ms`] so the wrap is handled the same
//! way everywhere.

/// Returns the milliseconds from `since_ms` to `now_ms` on the wrapping
/// counter.
///
/// Correct across a single counter wrap; intervals longer than the full
/// counter period are indistinguishable from short ones, which is far beyond
/// any window this pipeline uses.
#[inline]
pub fn elapsed_ms(now_ms: u32, since_ms: u32) -> u32 {
    now_ms.wrapping_sub(since_ms)
}
