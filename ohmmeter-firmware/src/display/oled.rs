//! SSD1306 128x64 OLED over I2C
//!
//! Drawing goes to the driver's RAM buffer through embedded-graphics and
//! reaches the panel on `flush`.

use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use ohmmeter_display::{DisplayBackend, DisplayError, GraphicsDisplayBackend, Ink};
use ohmmeter_display::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Buffered SSD1306 on I2C1
pub type Oled = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Async>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// `GraphicsDisplayBackend` over a buffered SSD1306
pub struct OledBackend {
    display: Oled,
    text_style: MonoTextStyle<'static, BinaryColor>,
    initialized: bool,
}

impl OledBackend {
    /// Wrap a display in buffered graphics mode (not yet initialized)
    pub fn new(display: Oled) -> Self {
        let text_style = MonoTextStyleBuilder::new()
            .font(&FONT_5X8)
            .text_color(BinaryColor::On)
            .build();

        Self {
            display,
            text_style,
            initialized: false,
        }
    }

    /// Send the panel init sequence and blank it
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init().map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        self.display.clear_buffer();
        self.display.flush().map_err(|_| DisplayError::Communication)
    }

    fn check_ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn line(&mut self, start: Point, end: Point, ink: Ink) -> Result<(), DisplayError> {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color(ink), 1))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)
    }
}

impl DisplayBackend for OledBackend {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        self.check_ready()?;
        check_point(x, y)?;
        Text::with_baseline(text, point(x, y), self.text_style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.display.flush().map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl GraphicsDisplayBackend for OledBackend {
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError> {
        self.check_ready()?;
        check_point(x, y)?;
        if length == 0 {
            return Ok(());
        }
        let end = point(x + length - 1, y);
        self.line(point(x, y), end, ink)
    }

    fn draw_vline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError> {
        self.check_ready()?;
        check_point(x, y)?;
        if length == 0 {
            return Ok(());
        }
        let end = point(x, y + length - 1);
        self.line(point(x, y), end, ink)
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        self.check_ready()?;
        check_point(x, y)?;
        Rectangle::new(point(x, y), Size::new(width as u32, height as u32))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        self.check_ready()?;
        check_point(x, y)?;
        Rectangle::new(point(x, y), Size::new(width as u32, height as u32))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)
    }
}

fn check_point(x: u16, y: u16) -> Result<(), DisplayError> {
    if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
        return Err(DisplayError::InvalidCoordinates);
    }
    Ok(())
}

fn point(x: u16, y: u16) -> Point {
    Point::new(x as i32, y as i32)
}

fn color(ink: Ink) -> BinaryColor {
    match ink {
        Ink::On => BinaryColor::On,
        Ink::Off => BinaryColor::Off,
    }
}
