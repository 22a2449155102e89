//! Position-dependent routing from raw lines to logical events.
//!
//! The router owns all pipeline state (debouncer, selector, encoder) and
//! stitches the components together once per poll: take one register
//! snapshot, decode the selector position, then partition the lines. While
//! the selector sits in the routed range, the three shared lines act as a
//! mode-specific button plus encoder; everywhere else they are read but
//! deliberately produce nothing (the range is reserved for future output
//! routing). The remaining lines are plain debounced buttons.
//!
//! Hardware is lent per poll; the router never holds the bus or the ADC
//! between calls.

use crate::config::{EncoderIdMode, InputConfig, CHANNEL_COUNT, ROUTED_LINE_COUNT};
use crate::debounce::Debouncer;
use crate::encoder::{Direction, QuadratureDecoder};
use crate::events::{EventSink, LogicalEvent};
use crate::rotary::RotarySelector;
use crate::sampler;
use crate::traits::{AnalogSource, ShiftRegisterBus};

/// Line index of the routed direct button.
const DIRECT_LINE: usize = 0;
/// Line index of the encoder clock phase.
const ENCODER_CLK_LINE: usize = 1;
/// Line index of the encoder data phase.
const ENCODER_DT_LINE: usize = 2;

/// Owns the acquisition pipeline and dispatches lines to logical ids.
pub struct InputRouter {
    config: InputConfig,
    debouncer: Debouncer<CHANNEL_COUNT>,
    selector: RotarySelector,
    encoder: QuadratureDecoder,
    /// Mapped routed position at the previous poll, `None` when unrouted.
    last_routed_position: Option<u8>,
    /// Last logical level emitted for the direct line.
    last_direct_level: Option<bool>,
    /// Selector movement pending diagnostics.
    position_change: Option<u8>,
    /// Raw register byte from the most recent poll.
    last_snapshot: u8,
}

impl InputRouter {
    /// Builds the pipeline from a validated configuration.
    pub fn new(config: InputConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            selector: RotarySelector::new(config.thresholds, config.rotary_interval_ms),
            encoder: QuadratureDecoder::new(config.encoder_debounce_ms),
            last_routed_position: None,
            last_direct_level: None,
            position_change: None,
            last_snapshot: 0,
            config,
        }
    }

    /// Runs one poll cycle and emits any due events into `sink`.
    ///
    /// Event order within a poll is fixed: routed direct line, encoder pair,
    /// then ordinary channels in ascending index. A selector move never
    /// resets debouncer or encoder state; ids are resolved at emission time
    /// against the current position.
    pub fn poll<B, A, S>(&mut self, bus: &mut B, adc: &mut A, now_ms: u32, sink: &mut S)
    where
        B: ShiftRegisterBus,
        A: AnalogSource,
        S: EventSink,
    {
        let snapshot = sampler::sample(bus);
        self.last_snapshot = snapshot;
        let position = self.selector.decode(adc, now_ms);
        let routed = self.config.is_routed(position);

        self.track_position(position, routed);

        if routed {
            let base = self.config.routed_base(position);
            self.route_direct_line(snapshot, base, now_ms, sink);
            self.route_encoder_lines(snapshot, base, now_ms, sink);
        }

        for channel in ROUTED_LINE_COUNT..CHANNEL_COUNT {
            let raw = line_level(snapshot, channel);
            if let Some(level) = self.debouncer.update(channel, raw, now_ms) {
                let id = self.config.channel_id_base + channel as u16;
                sink.on_event(LogicalEvent::new(id, !level));
            }
        }
    }

    /// Selector position decoded on the most recent poll.
    pub fn position(&self) -> Option<u8> {
        self.selector.position()
    }

    /// Net accepted encoder detents, clockwise positive.
    pub fn encoder_steps(&self) -> i32 {
        self.encoder.step_count()
    }

    /// Raw register byte captured by the most recent poll, bit `i` = line `i`.
    pub fn last_snapshot(&self) -> u8 {
        self.last_snapshot
    }

    /// Configuration the router was built from.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Returns the selector position once after each mapped-mode change.
    ///
    /// Set when the selector enters or leaves the routed range or switches
    /// between routed positions; movement between unrouted positions is not
    /// reported. Cleared by the read.
    pub fn take_position_change(&mut self) -> Option<u8> {
        self.position_change.take()
    }

    fn track_position(&mut self, position: u8, routed: bool) {
        let mapped = if routed { Some(position) } else { None };
        if mapped != self.last_routed_position {
            self.position_change = Some(position);
            self.last_routed_position = mapped;
        }
    }

    fn route_direct_line<S: EventSink>(
        &mut self,
        snapshot: u8,
        base: u16,
        now_ms: u32,
        sink: &mut S,
    ) {
        let raw = line_level(snapshot, DIRECT_LINE);
        if let Some(level) = self.debouncer.update(DIRECT_LINE, raw, now_ms) {
            let logical = !level;
            if self.last_direct_level != Some(logical) {
                self.last_direct_level = Some(logical);
                sink.on_event(LogicalEvent::new(base, logical));
            }
        }
    }

    fn route_encoder_lines<S: EventSink>(
        &mut self,
        snapshot: u8,
        base: u16,
        now_ms: u32,
        sink: &mut S,
    ) {
        // Active low: a line pulled down is a logical high to the decoder.
        let clk = !line_level(snapshot, ENCODER_CLK_LINE);
        let dt = !line_level(snapshot, ENCODER_DT_LINE);

        if let Some(direction) = self.encoder.step(clk, dt, now_ms) {
            let id = match (self.config.encoder_id_mode, direction) {
                (EncoderIdMode::PositionRouted, Direction::CounterClockwise) => base + 1,
                (EncoderIdMode::PositionRouted, Direction::Clockwise) => base + 2,
                (EncoderIdMode::Fixed { ccw_id, .. }, Direction::CounterClockwise) => ccw_id,
                (EncoderIdMode::Fixed { cw_id, .. }, Direction::Clockwise) => cw_id,
            };
            // A detent has no duration: emit an instantaneous press/release.
            sink.on_event(LogicalEvent::new(id, true));
            sink.on_event(LogicalEvent::new(id, false));
        }
    }
}

/// Physical level of `line` in a register snapshot.
#[inline]
fn line_level(snapshot: u8, line: usize) -> bool {
    (snapshot >> line) & 1 != 0
}
