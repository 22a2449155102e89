//! Snapshot acquisition from the parallel-load shift register.
//!
//! One call per poll cycle latches all eight external lines at the same
//! instant and shifts them out over the serial data line. Hardware is lent
//! per call rather than owned here, so the polling task and host tests keep
//! the bus between polls.

use crate::traits::ShiftRegisterBus;

/// Applies the idle line levels.
///
/// Call once before the first [`sample`]: load high keeps the register in
/// shift mode, clock low, clock-enable high keeps the serial output off the
/// wire.
pub fn init<B: ShiftRegisterBus>(bus: &mut B) {
    bus.set_load(true);
    bus.set_clock(false);
    bus.set_clock_enable(true);
}

/// Latches the external lines and clocks out one 8-bit snapshot.
///
/// Bit `i` of the result is the physical level of line `i`. The register
/// presents line 7 first, so bits are assembled MSB-first; serial data is
/// read before each clock pulse, the rising edge shifting the next bit onto
/// the wire.
pub fn sample<B: ShiftRegisterBus>(bus: &mut B) -> u8 {
    bus.set_load(false);
    bus.settle();
    bus.set_load(true);
    bus.settle();

    bus.set_clock_enable(false);
    let mut snapshot = 0u8;
    for _ in 0..8 {
        snapshot = (snapshot << 1) | u8::from(bus.read_data());
        bus.set_clock(true);
        bus.settle();
        bus.set_clock(false);
        bus.settle();
    }
    bus.set_clock_enable(true);

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{BusOp, MockShiftRegisterBus};

    #[test]
    fn test_init_applies_idle_levels() {
        let mut bus = MockShiftRegisterBus::new(0);
        init(&mut bus);

        assert_eq!(
            bus.ops(),
            &[
                BusOp::Load(true),
                BusOp::Clock(false),
                BusOp::ClockEnable(true),
            ]
        );
    }

    #[test]
    fn test_sample_reads_lines_msb_first() {
        let mut bus = MockShiftRegisterBus::new(0b1010_0110);
        init(&mut bus);
        assert_eq!(sample(&mut bus), 0b1010_0110);

        // Line i lands in bit i.
        let mut bus = MockShiftRegisterBus::new(1 << 6);
        init(&mut bus);
        assert_eq!(sample(&mut bus), 0b0100_0000);
    }

    #[test]
    fn test_sample_handshake_order() {
        let mut bus = MockShiftRegisterBus::new(0xFF);
        init(&mut bus);
        bus.clear_ops();
        sample(&mut bus);

        let ops = bus.ops();
        // Load pulse, then output enable, before any clock edge.
        assert_eq!(ops[0], BusOp::Load(false));
        assert_eq!(ops[1], BusOp::Load(true));
        assert_eq!(ops[2], BusOp::ClockEnable(false));
        // Eight full clock pulses.
        let pulses = ops
            .iter()
            .filter(|op| matches!(op, BusOp::Clock(true)))
            .count();
        assert_eq!(pulses, 8);
        // Output disabled again at the end.
        assert_eq!(*ops.last().unwrap(), BusOp::ClockEnable(true));
    }

    #[test]
    fn test_consecutive_samples_latch_fresh_lines() {
        let mut bus = MockShiftRegisterBus::new(0xFF);
        init(&mut bus);
        assert_eq!(sample(&mut bus), 0xFF);

        bus.set_lines(0xFE);
        assert_eq!(sample(&mut bus), 0xFE);
    }
}
