//! RP2040-specific HAL for the ohmmeter firmware
//!
//! This crate provides RP2040-specific device handles:
//!
//! - Averaged ADC reads on the divider channel
//! - WS2812 LED matrix over PIO + DMA
//! - BOOTSEL button and reboot into the USB bootloader

#![no_std]

pub mod adc;
pub mod bootsel;
pub mod matrix;

pub use adc::{AdcError, AveragingAdc};
pub use bootsel::{reboot_to_bootloader, BootselButton};
pub use matrix::LedMatrix;
