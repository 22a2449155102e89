#![cfg_attr(not(test), no_std)]

//! wheel_input_firmware - Embassy firmware for the wheel controller input pipeline
//!
//! This crate provides Embassy async wrappers and RP2350-specific
//! implementations for the core acquisition logic.
//!
//! # Design Principles
//!
//! - **Embassy tasks**: Async polling task feeding a bounded event channel
//! - **Platform implementations**: GPIO/ADC bindings behind the core bus traits
//! - **Host testable**: Everything except `platform::rp2350` builds on host

// The RTT logger must be linked exactly once in target builds.
#[cfg(feature = "rp2350")]
use defmt_rtt as _;

// Platform abstraction layer
pub mod platform;

// Core systems - contains firmware-specific core code (logging)
pub mod core;

// Event channel between the polling task and the protocol consumer
pub mod events;

// Poll-loop glue shared by platform tasks and host tests
pub mod input;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
