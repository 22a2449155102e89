//! Embassy tasks owning the input hardware.

use embassy_time::{Duration, Ticker};
use wheel_input_core::config::InputConfig;

use super::adc::LadderAdc;
use super::register::ShiftRegisterPins;
use crate::events::ChannelSink;
use crate::input::InputPipeline;
use crate::platform::now_ms;

/// Poll cadence of the acquisition loop.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Acquisition polling task.
///
/// Takes ownership of the register lines and the ladder ADC, drives the bus
/// to idle, then polls the pipeline once per millisecond forever. Events
/// land in the global queue via [`ChannelSink::shared`]; the uplink drains
/// it at its own pace. Spawn once from main after binding the pins.
#[embassy_executor::task]
pub async fn input_task(
    mut bus: ShiftRegisterPins<'static>,
    mut adc: LadderAdc<'static>,
    config: InputConfig,
) {
    let mut pipeline = InputPipeline::new(config);
    let mut sink = ChannelSink::shared();
    pipeline.init(&mut bus);

    let debounce_ms = pipeline.config().debounce_ms;
    crate::log_info!("Input poll task started (debounce {} ms)", debounce_ms);

    let mut ticker = Ticker::every(POLL_INTERVAL);
    loop {
        pipeline.poll(&mut bus, &mut adc, now_ms(), &mut sink);
        ticker.next().await;
    }
}
