//! Hardware bus traits for the acquisition pipeline.
//!
//! This module provides the `ShiftRegisterBus` and `AnalogSource` traits that
//! abstract over the input hardware (shift-register lines, selector ladder) to
//! enable host testing without embedded dependencies.

use heapless::Vec;

/// Control and data lines of the parallel-load shift register.
///
/// This trait abstracts over the four lines the sampler drives:
/// - RP2350 GPIO implementation lives in the firmware crate
/// - `MockShiftRegisterBus` for host testing with scripted line levels
///
/// Level arguments are physical (`true` = high). The parallel-load and
/// clock-enable lines are active low on the register itself; callers drive
/// the levels the protocol requires and implementations pass them through.
pub trait ShiftRegisterBus {
    /// Drives the parallel-load line.
    fn set_load(&mut self, high: bool);

    /// Drives the shift clock.
    fn set_clock(&mut self, high: bool);

    /// Drives the clock-enable line.
    fn set_clock_enable(&mut self, high: bool);

    /// Reads the serial data output.
    fn read_data(&mut self) -> bool;

    /// Holds long enough for the register to register the previous edge.
    ///
    /// A few microseconds on hardware; the mock's settle is a no-op.
    fn settle(&mut self);
}

/// Single analog input for the selector ladder.
///
/// Readings are on the 10-bit scale (`0..=1023`); implementations with wider
/// converters scale down before returning.
pub trait AnalogSource {
    /// Performs one conversion.
    fn read(&mut self) -> u16;
}

// ============================================================================
// Mock Implementations (always available for testing)
// ============================================================================

/// One recorded control-line edge, for handshake assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// Parallel-load line driven to the contained level.
    Load(bool),
    /// Clock line driven to the contained level.
    Clock(bool),
    /// Clock-enable line driven to the contained level.
    ClockEnable(bool),
}

/// Mock shift register for host tests.
///
/// Models the register protocol: a low pulse on the load line latches the
/// current `lines` byte, the serial output then presents the latched bits
/// starting from line 7, and each rising clock edge (while enabled) shifts to
/// the next bit. Every control-line edge is recorded in `ops` so tests can
/// assert the handshake ordering.
pub struct MockShiftRegisterBus {
    lines: u8,
    latched: u8,
    cursor: u8,
    enabled: bool,
    ops: Vec<BusOp, 64>,
}

impl MockShiftRegisterBus {
    /// Creates a mock with the given external line levels.
    pub fn new(lines: u8) -> Self {
        Self {
            lines,
            latched: 0,
            cursor: 0,
            enabled: false,
            ops: Vec::new(),
        }
    }

    /// Sets the external line levels latched by the next load pulse.
    pub fn set_lines(&mut self, lines: u8) {
        self.lines = lines;
    }

    /// Recorded control-line edges since the last clear.
    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    /// Drops the recorded edges.
    ///
    /// The recording buffer holds a few read cycles; long-running tests clear
    /// it between the phases they assert on.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn record(&mut self, op: BusOp) {
        let _ = self.ops.push(op);
    }
}

impl ShiftRegisterBus for MockShiftRegisterBus {
    fn set_load(&mut self, high: bool) {
        self.record(BusOp::Load(high));
        if !high {
            // Low level latches the parallel inputs and rewinds the output.
            self.latched = self.lines;
            self.cursor = 0;
        }
    }

    fn set_clock(&mut self, high: bool) {
        self.record(BusOp::Clock(high));
        if high && self.enabled && self.cursor < 8 {
            self.cursor += 1;
        }
    }

    fn set_clock_enable(&mut self, high: bool) {
        self.record(BusOp::ClockEnable(high));
        self.enabled = !high;
    }

    fn read_data(&mut self) -> bool {
        if !self.enabled || self.cursor > 7 {
            return false;
        }
        (self.latched >> (7 - self.cursor)) & 1 != 0
    }

    fn settle(&mut self) {}
}

/// Mock analog source with a settable value and a read counter.
pub struct MockAnalogSource {
    value: u16,
    reads: usize,
}

impl MockAnalogSource {
    /// Creates a mock returning `value` on every read.
    pub fn new(value: u16) -> Self {
        Self { value, reads: 0 }
    }

    /// Changes the value returned by subsequent reads.
    pub fn set(&mut self, value: u16) {
        self.value = value;
    }

    /// Number of conversions performed, for rate-limit assertions.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogSource for MockAnalogSource {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
