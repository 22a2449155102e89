//! Quadrature detent decoding with a half-step state machine.
//!
//! The encoder's two phase lines are sampled by the poll loop, packed into a
//! 2-bit code and run through a fixed transition table. Direction latches on
//! the first edge away from idle, the intermediate phase holds through the
//! remaining gray codes of the cycle, and the detent commits when both lines
//! return to idle. Levels are logical (active high); a detent at rest reads
//! `(false, false)`.

use crate::time::elapsed_ms;

/// Direction of one accepted encoder detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Data line led the cycle.
    Clockwise,
    /// Clock line led the cycle.
    CounterClockwise,
}

impl Direction {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::CounterClockwise => "CounterClockwise",
        }
    }
}

/// Decoder phase between detents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start = 0,
    CwIntermediate = 1,
    CcwIntermediate = 2,
}

type Entry = (Phase, Option<Direction>);

/// Half-step transition table indexed by `[phase][code]`, `code = dt<<1 | clk`.
///
/// The idle phase seeing both lines active at once is a skipped sample and
/// resets with no direction.
const TRANSITIONS: [[Entry; 4]; 3] = [
    // Start
    [
        (Phase::Start, None),
        (Phase::CcwIntermediate, None),
        (Phase::CwIntermediate, None),
        (Phase::Start, None),
    ],
    // CwIntermediate
    [
        (Phase::Start, Some(Direction::Clockwise)),
        (Phase::CwIntermediate, None),
        (Phase::CwIntermediate, None),
        (Phase::CwIntermediate, None),
    ],
    // CcwIntermediate
    [
        (Phase::Start, Some(Direction::CounterClockwise)),
        (Phase::CcwIntermediate, None),
        (Phase::CcwIntermediate, None),
        (Phase::CcwIntermediate, None),
    ],
];

/// State machine decoding one quadrature encoder.
pub struct QuadratureDecoder {
    phase: Phase,
    debounce_ms: u32,
    last_event_ms: u32,
    step_count: i32,
}

impl QuadratureDecoder {
    /// Creates a decoder with the given minimum detent spacing.
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            phase: Phase::Start,
            debounce_ms,
            last_event_ms: 0,
            step_count: 0,
        }
    }

    /// Advances the state machine with one sample of the phase lines.
    ///
    /// Returns a direction only when a detent cycle completes and at least
    /// the debounce interval has passed since the last accepted detent.
    /// Suppressed detents advance the phase but leave the spacing clock and
    /// the step counter untouched.
    pub fn step(&mut self, clk: bool, dt: bool, now_ms: u32) -> Option<Direction> {
        let code = ((dt as usize) << 1) | (clk as usize);
        let (next, direction) = TRANSITIONS[self.phase as usize][code];
        self.phase = next;

        let direction = direction?;
        if elapsed_ms(now_ms, self.last_event_ms) < self.debounce_ms {
            return None;
        }

        self.last_event_ms = now_ms;
        self.step_count = match direction {
            Direction::Clockwise => self.step_count.saturating_add(1),
            Direction::CounterClockwise => self.step_count.saturating_sub(1),
        };
        Some(direction)
    }

    /// Net accepted detents since construction, clockwise positive.
    pub fn step_count(&self) -> i32 {
        self.step_count
    }
}
