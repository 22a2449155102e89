//! Core traits for platform-agnostic input acquisition.
//!
//! This module provides trait abstractions that decouple the acquisition
//! pipeline from platform-specific implementations (Embassy, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the firmware crate

pub mod bus;

pub use bus::{AnalogSource, BusOp, MockAnalogSource, MockShiftRegisterBus, ShiftRegisterBus};
