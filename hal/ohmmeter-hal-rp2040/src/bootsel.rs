//! Reboot into the USB bootloader from a button
//!
//! Lets a board without an accessible BOOTSEL switch be reflashed: a
//! press on the configured button drops straight into the ROM's USB mass
//! storage mode.

use embassy_rp::gpio::Input;

/// Active-low push button wired to a GPIO with pull-up
pub struct BootselButton<'d> {
    pin: Input<'d>,
}

impl<'d> BootselButton<'d> {
    /// Wrap an input pin (configure it with `Pull::Up`)
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Wait until the button is pressed (falling edge)
    pub async fn wait_for_press(&mut self) {
        self.pin.wait_for_falling_edge().await;
    }
}

/// Reset into the USB bootloader
///
/// Never returns: the ROM routine resets the chip.
pub fn reboot_to_bootloader() -> ! {
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
    loop {
        cortex_m::asm::nop();
    }
}
