//! wheel_input_core - Pure no_std input acquisition for the wheel controller
//!
//! This crate contains the platform-agnostic acquisition pipeline
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Hardware lent to the pipeline via traits
//!
//! # Modules
//!
//! - [`traits`]: Hardware-facing trait abstractions (ShiftRegisterBus, AnalogSource)
//! - [`config`]: Pipeline configuration, validation and identifier layout
//! - [`events`]: Logical event model and the EventSink seam
//! - [`sampler`]: Shift-register snapshot acquisition
//! - [`debounce`]: Per-channel silence-window debouncing
//! - [`rotary`]: Selector position decoding from the analog ladder
//! - [`encoder`]: Quadrature detent decoding
//! - [`router`]: Position-dependent routing to logical events
//! - [`time`]: Wrapping millisecond arithmetic

#![no_std]

pub mod config;
pub mod debounce;
pub mod encoder;
pub mod events;
pub mod rotary;
pub mod router;
pub mod sampler;
pub mod time;
pub mod traits;
