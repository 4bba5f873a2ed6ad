//! Ohmmeter - Resistor Color Code Meter Firmware
//!
//! Main firmware binary for RP2040-based boards. Measures an unknown
//! resistor through a voltage divider, snaps it to the nearest E24 value
//! and shows its color bands on an SSD1306 OLED and a 5x5 WS2812 matrix.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::Pio;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use {defmt_rtt as _, panic_probe as _};

use ohmmeter_hal_rp2040::{AveragingAdc, BootselButton, LedMatrix};

use crate::display::OledBackend;

mod channels;
mod config;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ohmmeter firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Divider tap on ADC2 (GPIO28)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let divider_channel = Channel::new_pin(p.PIN_28, Pull::None);
    let adc = AveragingAdc::new(adc, divider_channel);
    info!("ADC initialized");

    // OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.display.i2c_frequency_hz;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);
    let interface = I2CDisplayInterface::new_custom_address(i2c, config.display.i2c_address);
    let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    // A missing panel is not fatal: the matrix still shows the bands
    let mut oled = OledBackend::new(display);
    match oled.init() {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("OLED init failed: {:?}", e),
    }

    // LED matrix on PIO0 SM0 (DIN=GPIO7)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let mut matrix = LedMatrix::new(
        &mut common,
        sm0,
        p.DMA_CH0,
        p.PIN_7,
        config.matrix.brightness_pct,
    );
    matrix.clear();
    matrix.flush().await;
    info!("LED matrix initialized");

    // Bootloader button on GPIO6, active low
    let button = BootselButton::new(Input::new(p.PIN_6, Pull::Up));

    spawner.spawn(unwrap!(tasks::meter_task(
        adc,
        config.divider,
        config.sampling
    )));
    spawner.spawn(unwrap!(tasks::render_task(oled, matrix)));
    spawner.spawn(unwrap!(tasks::bootsel_task(button)));

    info!("All tasks spawned, firmware running");
}
