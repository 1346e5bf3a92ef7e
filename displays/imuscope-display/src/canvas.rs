//! Canvas trait
//!
//! The drawing operations the renderer needs, in screen pixels.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// Communication error with the display
    Communication,
    /// Formatted text did not fit its buffer
    TextOverflow,
    /// Panel has not been brought up
    NotInitialized,
}

/// Pixel drawing surface
pub trait Canvas {
    /// Fill the whole screen
    fn clear(&mut self, color: Rgb565) -> Result<(), CanvasError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), CanvasError>;

    /// Draw text with its top-left corner at `at`
    ///
    /// `\n` starts a new line below the first.
    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), CanvasError>;

    /// Draw text, discarding any pixel outside `clip`
    fn draw_text_clipped(
        &mut self,
        at: Point,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        clip: Rectangle,
    ) -> Result<(), CanvasError>;

    /// Draw a one pixel high horizontal line
    fn hline(&mut self, from: Point, length: u32, color: Rgb565) -> Result<(), CanvasError>;
}

/// [`Canvas`] over an embedded-graphics draw target using a mono font
pub struct GraphicsCanvas<D> {
    target: D,
    font: &'static MonoFont<'static>,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D, font: &'static MonoFont<'static>) -> Self {
        Self { target, font }
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn text<'t>(
        &self,
        at: Point,
        text: &'t str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Text<'t, embedded_graphics::mono_font::MonoTextStyle<'static, Rgb565>> {
        let style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(fg)
            .background_color(bg)
            .build();
        Text::with_baseline(text, at, style, Baseline::Top)
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self, color: Rgb565) -> Result<(), CanvasError> {
        self.target
            .clear(color)
            .map_err(|_| CanvasError::Communication)
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), CanvasError> {
        self.target
            .fill_solid(&area, color)
            .map_err(|_| CanvasError::Communication)
    }

    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), CanvasError> {
        let text = self.text(at, text, fg, bg);
        text.draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| CanvasError::Communication)
    }

    fn draw_text_clipped(
        &mut self,
        at: Point,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        clip: Rectangle,
    ) -> Result<(), CanvasError> {
        let text = self.text(at, text, fg, bg);
        text.draw(&mut self.target.clipped(&clip))
            .map(|_| ())
            .map_err(|_| CanvasError::Communication)
    }

    fn hline(&mut self, from: Point, length: u32, color: Rgb565) -> Result<(), CanvasError> {
        self.fill_rect(Rectangle::new(from, Size::new(length, 1)), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::iso_8859_1::FONT_10X20;

    /// Small RGB565 target that tracks the bounding box of all writes
    struct TestTarget {
        pixels: [[Rgb565; 64]; 32],
        touched: Option<(Point, Point)>,
    }

    impl TestTarget {
        fn new() -> Self {
            Self {
                pixels: [[Rgb565::BLACK; 64]; 32],
                touched: None,
            }
        }
    }

    impl OriginDimensions for TestTarget {
        fn size(&self) -> Size {
            Size::new(64, 32)
        }
    }

    impl DrawTarget for TestTarget {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(p, color) in pixels {
                if p.x < 0 || p.y < 0 || p.x >= 64 || p.y >= 32 {
                    continue;
                }
                self.pixels[p.y as usize][p.x as usize] = color;
                self.touched = Some(match self.touched {
                    None => (p, p),
                    Some((min, max)) => (min.component_min(p), max.component_max(p)),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_clipped_text_stays_in_region() {
        let mut canvas = GraphicsCanvas::new(TestTarget::new(), &FONT_10X20);
        let region = Rectangle::new(Point::new(4, 2), Size::new(25, 20));

        // Three glyphs are 30 px wide; the region is 25
        canvas
            .draw_text_clipped(Point::new(4, 2), "888", Rgb565::YELLOW, Rgb565::RED, region)
            .unwrap();

        let (min, max) = canvas.target().touched.unwrap();
        assert!(region.contains(min));
        assert!(region.contains(max));
        assert_eq!(max.x, 28);
    }

    #[test]
    fn test_fill_rect_and_hline() {
        let mut canvas = GraphicsCanvas::new(TestTarget::new(), &FONT_10X20);
        canvas
            .fill_rect(Rectangle::new(Point::new(1, 1), Size::new(2, 2)), Rgb565::RED)
            .unwrap();
        canvas.hline(Point::new(0, 10), 64, Rgb565::WHITE).unwrap();

        let target = canvas.into_inner();
        assert_eq!(target.pixels[1][1], Rgb565::RED);
        assert_eq!(target.pixels[2][2], Rgb565::RED);
        assert_eq!(target.pixels[3][3], Rgb565::BLACK);
        assert!(target.pixels[10].iter().all(|&c| c == Rgb565::WHITE));
        assert!(target.pixels[11].iter().all(|&c| c == Rgb565::BLACK));
    }
}
