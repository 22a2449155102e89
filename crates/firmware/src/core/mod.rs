//! Core firmware infrastructure
//!
//! Firmware-side infrastructure shared by every module in this crate. The
//! acquisition state machines themselves live in wheel_input_core; this
//! module holds the pieces that only make sense inside the firmware,
//! currently the logging layer.

pub mod logging;
