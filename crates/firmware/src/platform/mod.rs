//! Platform abstraction layer
//!
//! This module isolates hardware access for the acquisition pipeline. The
//! rest of the crate reaches hardware only through the wheel_input_core bus
//! traits plus the [`now_ms`] clock binding here.

pub mod time;

// Platform implementations
#[cfg(feature = "rp2350")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use time::now_ms;
