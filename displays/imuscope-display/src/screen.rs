//! Panel bring-up
//!
//! The panel is built on the first splash. A panel that does not answer
//! fails the splash like any other draw error.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use imuscope_core::traits::Screen;
use imuscope_core::SensorSample;

use crate::canvas::{CanvasError, GraphicsCanvas};
use crate::renderer::Renderer;

/// [`Screen`] whose draw target comes from a one-shot panel init
pub struct PanelScreen<D, F> {
    init: Option<F>,
    font: &'static MonoFont<'static>,
    renderer: Option<Renderer<GraphicsCanvas<D>>>,
}

impl<D, F> PanelScreen<D, F>
where
    D: DrawTarget<Color = Rgb565>,
    F: FnOnce() -> Result<D, CanvasError>,
{
    pub fn new(init: F, font: &'static MonoFont<'static>) -> Self {
        Self {
            init: Some(init),
            font,
            renderer: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.renderer.is_some()
    }

    /// Hand over the renderer once the panel is up
    pub fn into_renderer(self) -> Option<Renderer<GraphicsCanvas<D>>> {
        self.renderer
    }

    fn renderer_mut(&mut self) -> Result<&mut Renderer<GraphicsCanvas<D>>, CanvasError> {
        self.renderer.as_mut().ok_or(CanvasError::NotInitialized)
    }
}

impl<D, F> Screen for PanelScreen<D, F>
where
    D: DrawTarget<Color = Rgb565>,
    F: FnOnce() -> Result<D, CanvasError>,
{
    type Error = CanvasError;

    fn splash(&mut self) -> Result<(), CanvasError> {
        if let Some(init) = self.init.take() {
            let panel = init()?;
            self.renderer = Some(Renderer::new(GraphicsCanvas::new(panel, self.font)));
        }
        self.renderer_mut()?.splash()
    }

    fn draw_layout(&mut self, sample: &SensorSample) -> Result<(), CanvasError> {
        self.renderer_mut()?.draw_static_layout(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::iso_8859_1::FONT_10X20;
    use embedded_graphics::prelude::*;

    use crate::layout::{BACKGROUND, LABEL};

    /// Full-size target that counts pixels by color
    #[derive(Default)]
    struct CountingPanel {
        background: usize,
        label: usize,
    }

    impl OriginDimensions for CountingPanel {
        fn size(&self) -> Size {
            Size::new(320, 240)
        }
    }

    impl DrawTarget for CountingPanel {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(_, color) in pixels {
                if color == BACKGROUND {
                    self.background += 1;
                } else if color == LABEL {
                    self.label += 1;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_layout_before_splash_is_rejected() {
        let mut screen = PanelScreen::new(|| Ok(CountingPanel::default()), &FONT_10X20);
        assert_eq!(
            screen.draw_layout(&SensorSample::default()),
            Err(CanvasError::NotInitialized)
        );
        assert!(!screen.is_initialized());
    }

    #[test]
    fn test_failed_init_leaves_no_renderer() {
        let mut screen = PanelScreen::new(
            || Err::<CountingPanel, _>(CanvasError::Communication),
            &FONT_10X20,
        );
        assert_eq!(screen.splash(), Err(CanvasError::Communication));
        assert_eq!(
            screen.draw_layout(&SensorSample::default()),
            Err(CanvasError::NotInitialized)
        );
        assert!(screen.into_renderer().is_none());
    }

    #[test]
    fn test_splash_brings_panel_up_once() {
        let mut inits = 0;
        let mut screen = PanelScreen::new(
            || {
                inits += 1;
                Ok(CountingPanel::default())
            },
            &FONT_10X20,
        );
        screen.splash().unwrap();
        screen.splash().unwrap();
        screen.draw_layout(&SensorSample::default()).unwrap();

        let panel = screen.into_renderer().unwrap().into_canvas().into_inner();
        assert_eq!(inits, 1);
        assert!(panel.background >= 2 * 320 * 240);
        assert!(panel.label > 0);
    }
}
