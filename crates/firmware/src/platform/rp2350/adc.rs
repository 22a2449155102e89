//! Selector ladder sampling on the RP2350 ADC.

use embassy_rp::adc::{self, Adc, Blocking};
use wheel_input_core::traits::AnalogSource;

/// Blocking ADC binding for the selector ladder.
///
/// Readings are folded from the converter's 12 bits down to the 10-bit scale
/// the decode thresholds are calibrated for. A failed conversion repeats the
/// last good reading.
pub struct LadderAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: adc::Channel<'d>,
    last: u16,
}

impl<'d> LadderAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: adc::Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last: 0,
        }
    }
}

impl AnalogSource for LadderAdc<'_> {
    fn read(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => {
                self.last = raw >> 2;
                self.last
            }
            Err(_) => {
                crate::log_warn!("adc conversion failed, keeping {}", self.last);
                self.last
            }
        }
    }
}
