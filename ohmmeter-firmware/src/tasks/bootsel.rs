//! Bootloader button task

use defmt::*;
use embassy_time::Timer;

use ohmmeter_hal_rp2040::{reboot_to_bootloader, BootselButton};

/// Let the RTT log drain before the ROM takes over
const REBOOT_DELAY_MS: u64 = 50;

/// Reboot into the USB bootloader when the button is pressed
#[embassy_executor::task]
pub async fn bootsel_task(mut button: BootselButton<'static>) {
    button.wait_for_press().await;

    warn!("BOOTSEL pressed, rebooting to USB bootloader");
    Timer::after_millis(REBOOT_DELAY_MS).await;
    reboot_to_bootloader();
}
