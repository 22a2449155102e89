//! Logical event model and the event sink seam.
//!
//! Pure output types for the acquisition pipeline. The router turns debounced
//! line transitions and encoder detents into [`LogicalEvent`] values and hands
//! them to an [`EventSink`]; everything downstream (wire protocol, host
//! communication) lives outside this crate.

/// A debounced logical input transition.
///
/// The sole observable output of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalEvent {
    /// Logical control identifier, routing already applied.
    pub id: u16,
    /// True when the control is pressed or the detent fired.
    ///
    /// Physical lines are active low; the router inverts before emission, so
    /// consumers never see raw polarity.
    pub active: bool,
}

impl LogicalEvent {
    /// Creates an event for `id` at the given logical state.
    pub const fn new(id: u16, active: bool) -> Self {
        Self { id, active }
    }

    /// State as the conventional `0`/`1` wire byte.
    pub const fn state_byte(&self) -> u8 {
        self.active as u8
    }
}

/// Synchronous consumer of logical events.
///
/// The router calls this once per emitted event, in deterministic order
/// within a poll (direct line, encoder pair, ordinary channels ascending).
/// Implementations must not block; the firmware adapter forwards into an
/// async channel with a non-blocking send.
pub trait EventSink {
    /// Receives one event.
    fn on_event(&mut self, event: LogicalEvent);
}

impl<F: FnMut(LogicalEvent)> EventSink for F {
    fn on_event(&mut self, event: LogicalEvent) {
        self(event)
    }
}
