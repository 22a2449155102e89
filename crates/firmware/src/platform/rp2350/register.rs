//! Bit-banged shift-register lines on RP2350 GPIO.

use embassy_rp::gpio::{Input, Output};
use embassy_time::Duration;
use wheel_input_core::traits::ShiftRegisterBus;

/// Hold time after each control-line edge.
///
/// The 74HC165 needs tens of nanoseconds; one microsecond is the shortest
/// delay the time driver resolves.
const SETTLE: Duration = Duration::from_micros(1);

/// GPIO binding of the shift-register handshake lines.
///
/// Construct the outputs in main with their idle levels (load high, clock
/// low, clock-enable high) and hand the set to the polling task; the sampler
/// re-drives the idle levels during init.
pub struct ShiftRegisterPins<'d> {
    load: Output<'d>,
    clock: Output<'d>,
    clock_enable: Output<'d>,
    data: Input<'d>,
}

impl<'d> ShiftRegisterPins<'d> {
    pub fn new(
        load: Output<'d>,
        clock: Output<'d>,
        clock_enable: Output<'d>,
        data: Input<'d>,
    ) -> Self {
        Self {
            load,
            clock,
            clock_enable,
            data,
        }
    }
}

impl ShiftRegisterBus for ShiftRegisterPins<'_> {
    fn set_load(&mut self, high: bool) {
        self.load.set_level(high.into());
    }

    fn set_clock(&mut self, high: bool) {
        self.clock.set_level(high.into());
    }

    fn set_clock_enable(&mut self, high: bool) {
        self.clock_enable.set_level(high.into());
    }

    fn read_data(&mut self) -> bool {
        self.data.is_high()
    }

    fn settle(&mut self) {
        embassy_time::block_for(SETTLE);
    }
}
