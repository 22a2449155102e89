//! RP2350 platform bindings.
//!
//! GPIO bit-bang of the register handshake, the selector ladder ADC and the
//! Embassy polling task. Compiled only with the `rp2350` feature; the rest
//! of the crate builds host-side.

pub mod adc;
pub mod register;
pub mod tasks;

pub use adc::LadderAdc;
pub use register::ShiftRegisterPins;
