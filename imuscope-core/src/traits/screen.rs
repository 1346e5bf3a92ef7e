//! Screen bring-up trait
//!
//! The boot sequence only needs to put the splash and the static layout
//! on screen; periodic redraws go through the display crate directly.

use crate::sample::SensorSample;

/// A display that can show the boot splash and the fixed layout
pub trait Screen {
    /// Error type for display communication
    type Error;

    /// Initialize the panel and show the greeting
    fn splash(&mut self) -> Result<(), Self::Error>;

    /// Clear the greeting and draw labels, separators and initial values
    fn draw_layout(&mut self, sample: &SensorSample) -> Result<(), Self::Error>;
}
