//! Poll-loop glue between the pure acquisition core and the firmware.
//!
//! [`InputPipeline`] wraps the core router with the concerns the core keeps
//! out: configuration fallback at construction, idle-line initialization, and
//! change-only diagnostics after each poll. The platform polling task owns
//! one instance; host tests drive the same type against the mock bus.

use wheel_input_core::config::InputConfig;
use wheel_input_core::events::EventSink;
use wheel_input_core::router::InputRouter;
use wheel_input_core::sampler;
use wheel_input_core::traits::{AnalogSource, ShiftRegisterBus};

/// Core router plus the firmware-side diagnostics around it.
pub struct InputPipeline {
    router: InputRouter,
    /// Raw snapshot at the previous poll, for change-only trace logging.
    logged_snapshot: Option<u8>,
}

impl InputPipeline {
    /// Builds the pipeline.
    ///
    /// An invalid `config` is replaced by [`InputConfig::default`] and
    /// reported once at warn level; the pipeline always starts.
    pub fn new(config: InputConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                crate::log_warn!("invalid input config ({}), using defaults", err.as_str());
                InputConfig::default()
            }
        };
        Self {
            router: InputRouter::new(config),
            logged_snapshot: None,
        }
    }

    /// Drives the register control lines to their idle levels.
    ///
    /// Call once before the first poll.
    pub fn init<B: ShiftRegisterBus>(&mut self, bus: &mut B) {
        sampler::init(bus);
    }

    /// Runs one poll cycle and logs whatever moved.
    ///
    /// Logical events go to `sink`; the raw line byte is traced when it
    /// differs from the previous poll and mapped-mode selector changes are
    /// reported at debug level.
    pub fn poll<B, A, S>(&mut self, bus: &mut B, adc: &mut A, now_ms: u32, sink: &mut S)
    where
        B: ShiftRegisterBus,
        A: AnalogSource,
        S: EventSink,
    {
        self.router.poll(bus, adc, now_ms, sink);

        let snapshot = self.router.last_snapshot();
        if self.logged_snapshot != Some(snapshot) {
            self.logged_snapshot = Some(snapshot);
            crate::log_trace!("raw lines {}", snapshot);
        }

        if let Some(position) = self.router.take_position_change() {
            crate::log_debug!("selector moved to position {}", position);
        }
    }

    /// Selector position decoded on the most recent poll.
    pub fn position(&self) -> Option<u8> {
        self.router.position()
    }

    /// Net accepted encoder detents, clockwise positive.
    pub fn encoder_steps(&self) -> i32 {
        self.router.encoder_steps()
    }

    /// Configuration actually in effect after validation.
    pub fn config(&self) -> &InputConfig {
        self.router.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use wheel_input_core::events::LogicalEvent;
    use wheel_input_core::traits::{MockAnalogSource, MockShiftRegisterBus};

    fn poll_into(
        pipeline: &mut InputPipeline,
        bus: &mut MockShiftRegisterBus,
        adc: &mut MockAnalogSource,
        now_ms: u32,
    ) -> Vec<LogicalEvent, 8> {
        let mut events: Vec<LogicalEvent, 8> = Vec::new();
        let mut sink = |event: LogicalEvent| {
            let _ = events.push(event);
        };
        pipeline.poll(bus, adc, now_ms, &mut sink);
        events
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let pipeline = InputPipeline::new(InputConfig::new().with_debounce_ms(0));
        assert_eq!(*pipeline.config(), InputConfig::default());
    }

    #[test]
    fn test_valid_config_is_kept() {
        let pipeline = InputPipeline::new(InputConfig::new().with_debounce_ms(20));
        assert_eq!(pipeline.config().debounce_ms, 20);
    }

    #[test]
    fn test_poll_forwards_debounced_events() {
        let mut pipeline = InputPipeline::new(InputConfig::default());
        let mut bus = MockShiftRegisterBus::new(0xFF);
        let mut adc = MockAnalogSource::new(300); // position 4
        pipeline.init(&mut bus);

        // Absorb the initial released-state burst, then press channel 4.
        poll_into(&mut pipeline, &mut bus, &mut adc, 0);
        poll_into(&mut pipeline, &mut bus, &mut adc, 51);
        bus.set_lines(0xFF & !(1 << 4));
        poll_into(&mut pipeline, &mut bus, &mut adc, 100);
        let events = poll_into(&mut pipeline, &mut bus, &mut adc, 151);

        assert_eq!(events.as_slice(), &[LogicalEvent::new(104, true)]);
        assert_eq!(pipeline.position(), Some(4));
        assert_eq!(pipeline.encoder_steps(), 0);
    }
}
