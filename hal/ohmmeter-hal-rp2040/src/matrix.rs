//! WS2812 LED matrix driver
//!
//! Drives the 5x5 matrix through embassy-rp's PIO WS2812 program. The
//! pixel buffer lives in the handle; nothing is written to the LEDs until
//! [`LedMatrix::flush`].

use embassy_rp::dma::Channel as DmaChannel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_rp::Peri;
use embassy_time::Timer;
use smart_leds::RGB8;

use ohmmeter_core::matrix::{MatrixFrame, LED_COUNT};

/// WS2812 latch time after a frame (datasheet reset pulse)
const RESET_US: u64 = 100;

/// LED matrix device handle
pub struct LedMatrix<'d, PIO: Instance, const SM: usize> {
    ws2812: PioWs2812<'d, PIO, SM, LED_COUNT, Grb>,
    /// Pending frame, full brightness
    frame: MatrixFrame,
    /// Global brightness in percent
    brightness_pct: u8,
}

impl<'d, PIO: Instance, const SM: usize> LedMatrix<'d, PIO, SM> {
    /// Create a new LED matrix driver
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `dma` - DMA channel feeding the state machine
    /// * `pin` - Data pin of the first LED
    /// * `brightness_pct` - Global brightness (0-100)
    pub fn new<D: DmaChannel, P: PioPin>(
        common: &mut Common<'d, PIO>,
        sm: StateMachine<'d, PIO, SM>,
        dma: Peri<'d, D>,
        pin: Peri<'d, P>,
        brightness_pct: u8,
    ) -> Self {
        let program = PioWs2812Program::new(common);
        let ws2812 = PioWs2812::new(common, sm, dma, pin, &program);

        Self {
            ws2812,
            frame: MatrixFrame::blank(),
            brightness_pct: brightness_pct.min(100),
        }
    }

    /// Set one LED by strip index
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        self.frame.set_index(index, color);
    }

    /// Turn every LED off (takes effect on the next flush)
    pub fn clear(&mut self) {
        self.frame = MatrixFrame::blank();
    }

    /// Write the pending frame to the LEDs
    pub async fn flush(&mut self) {
        let pixels = self.frame.dimmed(self.brightness_pct);
        self.ws2812.write(&pixels).await;
        Timer::after_micros(RESET_US).await;
    }

    /// Load a frame pixel by pixel and write it out
    pub async fn show(&mut self, frame: &MatrixFrame) {
        for (index, color) in frame.pixels().iter().enumerate() {
            self.set_pixel(index, *color);
        }
        self.flush().await;
    }
}
