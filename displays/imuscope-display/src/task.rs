//! Display refresh task

use imuscope_core::{ReadStatus, SampleReader};

use crate::canvas::{Canvas, CanvasError};
use crate::renderer::Renderer;

/// Periodic redraw of the value fields from the shared sample
pub struct RefreshTask<'a, C> {
    renderer: Renderer<C>,
    reader: SampleReader<'a>,
}

impl<'a, C: Canvas> RefreshTask<'a, C> {
    /// Take over a renderer whose static layout is already on screen
    pub fn new(renderer: Renderer<C>, reader: SampleReader<'a>) -> Self {
        Self { renderer, reader }
    }

    /// Redraw the value fields with the latest reading
    ///
    /// A stale reading is drawn like a fresh one; its status is returned
    /// so the caller can report it.
    pub fn run(&mut self) -> Result<ReadStatus, CanvasError> {
        let reading = self.reader.latest();
        self.renderer.redraw_values(&reading.sample)?;
        Ok(reading.status)
    }

    pub fn renderer(&self) -> &Renderer<C> {
        &self.renderer
    }
}
