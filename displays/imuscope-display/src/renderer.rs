//! Screen renderer
//!
//! Draws the splash, the static layout and the value fields onto a
//! [`Canvas`]. After the static layout is up, [`Renderer::redraw_values`]
//! is the only operation that draws anything.

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use heapless::String;
use imuscope_core::traits::Screen;
use imuscope_core::SensorSample;

use crate::canvas::{Canvas, CanvasError};
use crate::layout::{
    StaticItem, BACKGROUND, FOREGROUND, LABEL, SCREEN_WIDTH, SPLASH_TEXT, STATIC_ITEMS,
    VALUE_BACKGROUND, VALUE_FIELDS,
};

/// Room for any `f32` at two decimals
const VALUE_TEXT_LEN: usize = 48;

pub struct Renderer<C> {
    canvas: C,
}

impl<C: Canvas> Renderer<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Clear the screen and show the greeting
    pub fn splash(&mut self) -> Result<(), CanvasError> {
        self.canvas.clear(BACKGROUND)?;
        self.canvas
            .draw_text(Point::zero(), SPLASH_TEXT, FOREGROUND, BACKGROUND)
    }

    /// Clear the screen, draw labels and separators, then the values
    pub fn draw_static_layout(&mut self, sample: &SensorSample) -> Result<(), CanvasError> {
        self.canvas.clear(BACKGROUND)?;
        for item in &STATIC_ITEMS {
            match *item {
                StaticItem::Text { at, text, color } => {
                    self.canvas.draw_text(at, text, color, BACKGROUND)?
                }
                StaticItem::Separator { y } => {
                    self.canvas
                        .hline(Point::new(0, y), SCREEN_WIDTH, FOREGROUND)?
                }
            }
        }
        self.redraw_values(sample)
    }

    /// Redraw every value field from `sample`
    ///
    /// Each field clears its own rectangle and draws its value clipped to
    /// it. Nothing outside the value rectangles is touched.
    pub fn redraw_values(&mut self, sample: &SensorSample) -> Result<(), CanvasError> {
        for field in &VALUE_FIELDS {
            let mut text: String<VALUE_TEXT_LEN> = String::new();
            write!(text, "{:6.2}", field.field.value(sample))
                .map_err(|_| CanvasError::TextOverflow)?;

            self.canvas.fill_rect(field.region, VALUE_BACKGROUND)?;
            self.canvas
                .draw_text_clipped(field.cursor, &text, LABEL, VALUE_BACKGROUND, field.region)?;
        }
        Ok(())
    }
}

impl<C: Canvas> Screen for Renderer<C> {
    type Error = CanvasError;

    fn splash(&mut self) -> Result<(), CanvasError> {
        Renderer::splash(self)
    }

    fn draw_layout(&mut self, sample: &SensorSample) -> Result<(), CanvasError> {
        self.draw_static_layout(sample)
    }
}
