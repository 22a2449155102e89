//! Host-side hardware doubles.
//!
//! The mock bus and analog source live in wheel_input_core next to the
//! traits they implement; this module surfaces them at the platform path for
//! host tests and downstream tools built with the `mock` feature.

pub use wheel_input_core::traits::{MockAnalogSource, MockShiftRegisterBus};
