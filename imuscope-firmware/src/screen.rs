//! ST7789 panel
//!
//! 240x320 panel on SPI1, rotated to 320x240 landscape.

use defmt::*;
use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use imuscope_display::CanvasError;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;

pub type Panel = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>, Output<'static>>,
    ST7789,
    Output<'static>,
>;

/// Panel pins, handed over when the panel is brought up
pub struct PanelPins {
    pub spi: Spi<'static, SPI1, Blocking>,
    pub cs: Output<'static>,
    pub dc: Output<'static>,
    pub rst: Output<'static>,
}

/// Hardware reset and init sequence
pub fn init_panel(pins: PanelPins) -> Result<Panel, CanvasError> {
    let spi_device = ExclusiveDevice::new_no_delay(pins.spi, pins.cs).map_err(|_| {
        error!("Panel chip select failed");
        CanvasError::Communication
    })?;
    let di = SPIInterface::new(spi_device, pins.dc);

    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(pins.rst)
        .init(&mut Delay)
        .map_err(|e| {
            error!("Panel init failed: {:?}", Debug2Format(&e));
            CanvasError::Communication
        })
}
