//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod bootsel;
pub mod meter;
pub mod render;

pub use bootsel::bootsel_task;
pub use meter::meter_task;
pub use render::render_task;
