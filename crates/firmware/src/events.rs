//! Outbound event queue between the polling task and the host-link consumer.
//!
//! The polling task produces [`LogicalEvent`]s synchronously inside its poll
//! call; whatever owns the uplink drains them at its own pace by awaiting
//! [`EVENT_QUEUE`]. The producing side never blocks: when the consumer falls
//! behind and the queue fills, the newest event is dropped with a warning
//! rather than stalling the poll cadence.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use wheel_input_core::events::{EventSink, LogicalEvent};

/// Event queue capacity
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// Bounded queue of logical events awaiting transmission.
pub type EventQueue = Channel<CriticalSectionRawMutex, LogicalEvent, EVENT_QUEUE_DEPTH>;

/// Global event queue
pub static EVENT_QUEUE: EventQueue = Channel::new();

/// [`EventSink`] adapter that forwards events into an [`EventQueue`].
pub struct ChannelSink {
    queue: &'static EventQueue,
}

impl ChannelSink {
    /// Creates a sink feeding the given queue.
    pub const fn new(queue: &'static EventQueue) -> Self {
        Self { queue }
    }

    /// Creates a sink feeding the global [`EVENT_QUEUE`].
    pub const fn shared() -> Self {
        Self::new(&EVENT_QUEUE)
    }
}

impl EventSink for ChannelSink {
    fn on_event(&mut self, event: LogicalEvent) {
        // Try to send, drop if the queue is full (non-blocking)
        if self.queue.try_send(event).is_err() {
            crate::log_warn!("event queue full, dropping id {}", event.id);
        }
    }
}
