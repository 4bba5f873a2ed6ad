//! Output task
//!
//! Waits for each reading and shows it on the OLED and the LED matrix.

use defmt::*;
use embassy_rp::peripherals::PIO0;

use ohmmeter_display::MeasurementScreen;
use ohmmeter_hal_rp2040::LedMatrix;

use crate::channels::{Reading, MEASUREMENT};
use crate::display::OledBackend;

/// Render task
#[embassy_executor::task]
pub async fn render_task(mut oled: OledBackend, mut matrix: LedMatrix<'static, PIO0, 0>) {
    info!("Render task started");

    let mut screen = MeasurementScreen::new();

    loop {
        match MEASUREMENT.wait().await {
            Reading::Valid(measurement) => {
                let [first, second, multiplier] = measurement.bands.as_chars();
                info!(
                    "R = {} ohm, nearest E24 = {} ohm, bands {}{}{}",
                    measurement.resistance,
                    measurement.nearest.value,
                    first,
                    second,
                    multiplier
                );
                screen.set_measurement(&measurement);
                matrix.show(&measurement.frame()).await;
            }
            Reading::Fault {
                average_sample,
                error,
            } => {
                screen.set_fault(average_sample, error);
                matrix.clear();
                matrix.flush().await;
            }
        }

        if let Err(e) = screen.render(&mut oled) {
            warn!("OLED update failed: {:?}", e);
        }
    }
}
