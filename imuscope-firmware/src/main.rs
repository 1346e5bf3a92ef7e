//! imuscope - MPU6050 sensor display firmware
//!
//! Reads acceleration, rotation and temperature from an MPU6050 and shows
//! them on a 320x240 ST7789 TFT, mirrored to the serial console.
//!
//! Boot brings up the storage volume, the sensor and the display once.
//! After that a cooperative scheduler runs two periodic tasks forever:
//! sensor sampling, then display refresh.

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::{Delay, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use imuscope_core::boot::{bring_up, BootError};
use imuscope_core::config::{ImuConfig, TimingConfig};
use imuscope_core::scheduler::{Iterations, Scheduler};
use imuscope_core::tasks::SamplingTask;
use imuscope_core::traits::Clock;
use imuscope_core::{ReadStatus, SampleCell};
use imuscope_display::{load_font, PanelScreen, RefreshTask};
use imuscope_drivers::imu::Mpu6050;
use imuscope_hal::{SerialConsole, Volume};
use imuscope_hal_rp2040::{Rp2040FlashStorage, Rp2040UartTx};

mod board;
mod screen;

use crate::screen::PanelPins;

/// Scheduler time source
struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("imuscope firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Serial console, TX only
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::CONSOLE_BAUD;
    let console = SerialConsole::new(Rp2040UartTx::new(UartTx::new_blocking(
        p.UART0,
        p.PIN_0,
        uart_config,
    )));

    let mut volume = Volume::new(Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0));

    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = board::I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let imu = Mpu6050::new(i2c, Delay);

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = board::SPI_FREQUENCY;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let pins = PanelPins {
        spi,
        cs: Output::new(p.PIN_9, Level::High),
        dc: Output::new(p.PIN_8, Level::Low),
        rst: Output::new(p.PIN_12, Level::High),
    };
    let _backlight = Output::new(p.PIN_13, Level::High);
    let mut tft = PanelScreen::new(
        move || screen::init_panel(pins),
        load_font(board::FONT_NAME),
    );

    info!("Peripherals initialized");

    let mut cell = SampleCell::new();
    let (writer, reader) = cell.split();
    let mut sampler = SamplingTask::new(imu, writer, console);

    let imu_config = ImuConfig::default();
    let boot = bring_up(
        &mut volume,
        &mut sampler,
        &imu_config,
        &mut tft,
        &mut Delay,
    )
    .await;

    match boot {
        Ok(report) => info!(
            "Boot complete: volume v{}, {}, first read ok={}",
            report.volume.version, report.imu, report.initial_read_ok
        ),
        Err(err) => halt(sampler.console(), err).await,
    }

    let Some(renderer) = tft.into_renderer() else {
        halt(sampler.console(), BootError::DisplayUnavailable).await
    };

    let timing = TimingConfig::default();
    let mut refresh = RefreshTask::new(renderer, reader);

    let mut sample = || {
        if let Err(e) = sampler.run() {
            warn!("Sensor read failed: {}", e);
        }
    };
    let mut redraw = || match refresh.run() {
        Ok(ReadStatus::Stale { failures }) => {
            warn!("Showing stale sample ({} failed reads)", failures)
        }
        Ok(_) => {}
        Err(e) => error!("Display refresh failed: {}", e),
    };

    // Sampling first so each refresh shows the newest sample
    let mut scheduler: Scheduler<EmbassyClock> = Scheduler::new(EmbassyClock);
    unwrap!(scheduler.add_task(timing.sample_period_ms, Iterations::Forever, &mut sample));
    unwrap!(scheduler.add_task(timing.refresh_period_ms, Iterations::Forever, &mut redraw));
    scheduler.enable_all();

    info!(
        "Scheduler running: sample every {} ms, refresh every {} ms",
        timing.sample_period_ms, timing.refresh_period_ms
    );
    scheduler.run()
}

/// Stop after a boot failure, repeating the diagnostic forever
async fn halt<W: Write>(console: &mut W, err: BootError) -> ! {
    loop {
        error!("Boot failed: {}", err);
        let _ = writeln!(console, "{}", err.diagnostic());
        Timer::after_millis(board::HALT_REPEAT_MS).await;
    }
}
