//! Measurement task
//!
//! Averages a window of ADC readings, turns the mean into a resistance
//! and its color code, and publishes the result once per cycle.

use defmt::*;
use embassy_time::{Duration, Timer};

use ohmmeter_core::config::{DividerConfig, SamplingConfig};
use ohmmeter_core::Measurement;
use ohmmeter_hal_rp2040::AveragingAdc;

use crate::channels::{Reading, MEASUREMENT};

/// Measurement task
#[embassy_executor::task]
pub async fn meter_task(
    mut adc: AveragingAdc<'static>,
    divider: DividerConfig,
    sampling: SamplingConfig,
) {
    info!("Meter task started");

    let interval = Duration::from_millis(sampling.sample_interval_ms as u64);
    let cycle_delay = Duration::from_millis(sampling.cycle_delay_ms as u64);

    loop {
        match adc.read_averaged(sampling.window, interval).await {
            Ok(average_sample) => MEASUREMENT.signal(evaluate(average_sample, &divider)),
            Err(e) => warn!("ADC read failed (last raw {}): {:?}", adc.last_raw(), e),
        }

        Timer::after(cycle_delay).await;
    }
}

fn evaluate(average_sample: f32, divider: &DividerConfig) -> Reading {
    match Measurement::from_sample(average_sample, divider) {
        Ok(measurement) => {
            debug!(
                "ADC {} -> {} ohm -> E24 {} ({} x 10^{} / 10)",
                average_sample,
                measurement.resistance,
                measurement.nearest.value,
                measurement.nearest.mantissa_tenths(),
                measurement.nearest.decade
            );
            Reading::Valid(measurement)
        }
        Err(error) => {
            warn!("No estimate for ADC {}: {:?}", average_sample, error);
            Reading::Fault {
                average_sample,
                error,
            }
        }
    }
}
