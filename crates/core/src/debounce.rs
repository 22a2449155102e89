//! Per-channel debouncing with a silence window.
//!
//! Debounce-by-silence: any raw transition restarts the channel's window,
//! and a new level is reported only once the line has been quiet strictly
//! longer than the window. Channels are fully independent; the array is
//! sized at compile time and lives for the whole process.

use crate::time::elapsed_ms;

/// State of one debounced line.
#[derive(Debug, Clone, Copy, Default)]
struct ChannelState {
    /// Last raw level seen on the line.
    raw_level: bool,
    /// Last level reported to the caller.
    last_reported: bool,
    /// Timestamp of the last raw transition (ms).
    last_transition_ms: u32,
}

/// Silence-window debouncer for `N` independent channels.
///
/// All channels start at logical low, so lines idling high report one
/// initial transition once the first window expires.
pub struct Debouncer<const N: usize> {
    channels: [ChannelState; N],
    window_ms: u32,
}

impl<const N: usize> Debouncer<N> {
    /// Creates a debouncer with the given silence window in milliseconds.
    pub fn new(window_ms: u32) -> Self {
        Self {
            channels: [ChannelState::default(); N],
            window_ms,
        }
    }

    /// Feeds one raw sample for `channel` and returns the stable level if a
    /// debounced transition is due.
    ///
    /// The returned level is the physical one; callers apply polarity.
    /// `channel` must be below `N`.
    pub fn update(&mut self, channel: usize, raw: bool, now_ms: u32) -> Option<bool> {
        let ch = &mut self.channels[channel];

        if raw != ch.raw_level {
            ch.raw_level = raw;
            ch.last_transition_ms = now_ms;
        }

        if elapsed_ms(now_ms, ch.last_transition_ms) > self.window_ms && raw != ch.last_reported {
            ch.last_reported = raw;
            return Some(raw);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_line_reports_nothing() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        assert_eq!(debouncer.update(0, false, 0), None);
        assert_eq!(debouncer.update(0, false, 10), None);
        assert_eq!(debouncer.update(0, false, 100), None);
    }

    #[test]
    fn test_transition_reported_after_window() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        assert_eq!(debouncer.update(0, true, 0), None);
        assert_eq!(debouncer.update(0, true, 25), None);
        // Boundary is strict: 50 ms of silence is not enough.
        assert_eq!(debouncer.update(0, true, 50), None);
        assert_eq!(debouncer.update(0, true, 51), Some(true));
    }

    #[test]
    fn test_transition_reported_once() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        debouncer.update(0, true, 0);
        assert_eq!(debouncer.update(0, true, 51), Some(true));
        assert_eq!(debouncer.update(0, true, 52), None);
        assert_eq!(debouncer.update(0, true, 500), None);
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        debouncer.update(0, true, 0);
        debouncer.update(0, false, 20); // bounce
        debouncer.update(0, true, 30); // bounce back
        // Window restarted at 30: 80 ms is exactly the boundary, nothing yet.
        assert_eq!(debouncer.update(0, true, 80), None);
        assert_eq!(debouncer.update(0, true, 81), Some(true));
    }

    #[test]
    fn test_press_release_cycle() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        debouncer.update(0, true, 0);
        assert_eq!(debouncer.update(0, true, 60), Some(true));
        debouncer.update(0, false, 100);
        assert_eq!(debouncer.update(0, false, 140), None);
        assert_eq!(debouncer.update(0, false, 151), Some(false));
    }

    #[test]
    fn test_channels_are_independent() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        debouncer.update(0, true, 0);
        debouncer.update(1, true, 30);

        assert_eq!(debouncer.update(0, true, 51), Some(true));
        // Channel 1's window started 30 ms later.
        assert_eq!(debouncer.update(1, true, 51), None);
        assert_eq!(debouncer.update(1, true, 81), Some(true));
    }

    #[test]
    fn test_window_spans_counter_wrap() {
        let mut debouncer: Debouncer<4> = Debouncer::new(50);
        let before_wrap = u32::MAX - 10;
        debouncer.update(0, true, before_wrap);
        // 40 is 51 ms after the transition once the counter wraps.
        assert_eq!(debouncer.update(0, true, 40), Some(true));
    }
}
