//! Inter-task communication channels
//!
//! The meter task publishes one reading per cycle; the render task only
//! ever needs the latest one, so a `Signal` is enough.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use ohmmeter_core::{EstimateError, Measurement};

/// Outcome of one measurement cycle
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum Reading {
    /// Resistance estimated and matched to E24
    Valid(Measurement),
    /// Sample could not be turned into a resistance
    Fault {
        average_sample: f32,
        error: EstimateError,
    },
}

/// Latest reading (updated by meter task)
pub static MEASUREMENT: Signal<CriticalSectionRawMutex, Reading> = Signal::new();
