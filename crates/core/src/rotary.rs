//! Selector position decoding from the analog resistive ladder.
//!
//! The multi-position selector feeds one ADC input through a resistor
//! ladder; each detent lands in a distinct voltage band. Decoding scans an
//! ascending table of band upper bounds and reports the 1-based index of the
//! first band the reading falls into. Sampling is rate limited so the poll
//! loop does not hammer the converter.

use crate::config::POSITION_COUNT;
use crate::time::elapsed_ms;
use crate::traits::AnalogSource;

/// Position decoder for the rotary selector.
pub struct RotarySelector {
    thresholds: [u16; POSITION_COUNT],
    interval_ms: u32,
    last_sample_ms: u32,
    position: Option<u8>,
}

impl RotarySelector {
    /// Creates a decoder over the given band table and sampling interval.
    pub fn new(thresholds: [u16; POSITION_COUNT], interval_ms: u32) -> Self {
        Self {
            thresholds,
            interval_ms,
            last_sample_ms: 0,
            position: None,
        }
    }

    /// Returns the current selector position in `1..=12`.
    ///
    /// Takes a fresh reading at most once per interval and returns the cached
    /// position in between. The first call always samples.
    pub fn decode<A: AnalogSource>(&mut self, adc: &mut A, now_ms: u32) -> u8 {
        if let Some(position) = self.position {
            if elapsed_ms(now_ms, self.last_sample_ms) < self.interval_ms {
                return position;
            }
        }

        let reading = adc.read();
        let position = self.position_for(reading);
        self.position = Some(position);
        self.last_sample_ms = now_ms;
        position
    }

    /// Last decoded position, `None` before the first sample.
    pub fn position(&self) -> Option<u8> {
        self.position
    }

    /// Maps a 10-bit reading to its 1-based band.
    ///
    /// Readings above every band bound clamp to the last position.
    fn position_for(&self, reading: u16) -> u8 {
        for (index, &bound) in self.thresholds.iter().enumerate() {
            if reading <= bound {
                return (index + 1) as u8;
            }
        }
        POSITION_COUNT as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THRESHOLDS;
    use crate::traits::MockAnalogSource;

    /// Selector that samples on every call.
    fn unlimited() -> RotarySelector {
        RotarySelector::new(DEFAULT_THRESHOLDS, 0)
    }

    #[test]
    fn test_band_mapping() {
        let cases: &[(u16, u8)] = &[
            (0, 1),
            (46, 1),
            (47, 2),
            (139, 2),
            (232, 3),
            (325, 4),
            (418, 5),
            (511, 6),
            (604, 7),
            (697, 8),
            (698, 9),
            (700, 9), // detent 9 nominal reading
            (790, 9),
            (883, 10),
            (976, 11),
            (1023, 12),
        ];

        let mut selector = unlimited();
        let mut now = 0;
        for &(reading, expected) in cases {
            let mut adc = MockAnalogSource::new(reading);
            assert_eq!(selector.decode(&mut adc, now), expected);
            now += 1;
        }
    }

    #[test]
    fn test_over_scale_reading_clamps_to_last_position() {
        let mut selector = unlimited();
        let mut adc = MockAnalogSource::new(4095);
        assert_eq!(selector.decode(&mut adc, 0), 12);
    }

    #[test]
    fn test_first_call_always_samples() {
        let mut selector = RotarySelector::new(DEFAULT_THRESHOLDS, 10);
        let mut adc = MockAnalogSource::new(300);
        assert_eq!(selector.position(), None);
        assert_eq!(selector.decode(&mut adc, 0), 4);
        assert_eq!(adc.reads(), 1);
        assert_eq!(selector.position(), Some(4));
    }

    #[test]
    fn test_rate_limit_returns_cached_position() {
        let mut selector = RotarySelector::new(DEFAULT_THRESHOLDS, 10);
        let mut adc = MockAnalogSource::new(500);
        assert_eq!(selector.decode(&mut adc, 0), 6);

        // The knob moves, but inside the interval the cache answers.
        adc.set(700);
        assert_eq!(selector.decode(&mut adc, 5), 6);
        assert_eq!(selector.decode(&mut adc, 9), 6);
        assert_eq!(adc.reads(), 1);

        // Interval expired: fresh sample picks up the move.
        assert_eq!(selector.decode(&mut adc, 10), 9);
        assert_eq!(adc.reads(), 2);
    }

    #[test]
    fn test_interval_spans_counter_wrap() {
        let mut selector = RotarySelector::new(DEFAULT_THRESHOLDS, 10);
        let mut adc = MockAnalogSource::new(500);
        assert_eq!(selector.decode(&mut adc, u32::MAX - 3), 6);

        adc.set(700);
        // 2 is only 6 ms after the last sample.
        assert_eq!(selector.decode(&mut adc, 2), 6);
        // 7 is 11 ms after it.
        assert_eq!(selector.decode(&mut adc, 7), 9);
        assert_eq!(adc.reads(), 2);
    }
}
