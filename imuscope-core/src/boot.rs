//! Boot sequence
//!
//! Brings up storage, sensor and display once, in that order, before the
//! scheduler starts. Any failure is fail-stop: the caller receives a
//! [`BootError`] and must halt without starting any task.

use core::fmt::Write;

use embedded_hal_async::delay::DelayNs;
use imuscope_hal::{StorageVolume, VolumeError, VolumeHeader};

use crate::config::{ImuConfig, SPLASH_HOLD_MS};
use crate::console;
use crate::tasks::SamplingTask;
use crate::traits::{ImuSensor, Screen};

/// Unrecoverable boot failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// Storage volume could not be mounted
    StorageUnavailable(VolumeError),
    /// Sensor did not answer on the bus
    SensorNotFound,
    /// Sensor answered but rejected the measurement settings
    SensorConfig,
    /// Display could not be drawn to
    DisplayUnavailable,
}

impl BootError {
    /// Diagnostic line repeated while halted
    pub fn diagnostic(&self) -> &'static str {
        match self {
            BootError::StorageUnavailable(_) => "Cannot mount storage volume...",
            BootError::SensorNotFound => "Could not find MPU6050 chip, check wiring!",
            BootError::SensorConfig => "MPU6050 rejected its configuration!",
            BootError::DisplayUnavailable => "Display not responding!",
        }
    }
}

/// What boot established
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootReport {
    /// Header of the mounted volume
    pub volume: VolumeHeader,
    /// Measurement settings read back from the sensor
    pub imu: ImuConfig,
    /// Whether the initial reading succeeded
    pub initial_read_ok: bool,
}

/// Run the whole boot sequence
///
/// On success the sensor is readable, the shared sample holds the first
/// reading and the static layout is on screen. On failure the diagnostic
/// has been written to the console once.
pub async fn bring_up<V, S, W, D, T>(
    volume: &mut V,
    sampler: &mut SamplingTask<'_, S, W>,
    imu_config: &ImuConfig,
    screen: &mut D,
    delay: &mut T,
) -> Result<BootReport, BootError>
where
    V: StorageVolume,
    S: ImuSensor,
    W: Write,
    D: Screen,
    T: DelayNs,
{
    let result = boot_steps(volume, sampler, imu_config, screen, delay).await;
    if let Err(e) = &result {
        let _ = writeln!(sampler.console(), "{}", e.diagnostic());
    }
    result
}

async fn boot_steps<V, S, W, D, T>(
    volume: &mut V,
    sampler: &mut SamplingTask<'_, S, W>,
    imu_config: &ImuConfig,
    screen: &mut D,
    delay: &mut T,
) -> Result<BootReport, BootError>
where
    V: StorageVolume,
    S: ImuSensor,
    W: Write,
    D: Screen,
    T: DelayNs,
{
    let header = volume
        .mount()
        .await
        .map_err(BootError::StorageUnavailable)?;
    let _ = writeln!(sampler.console(), "Storage volume mounted properly");

    sampler
        .sensor_mut()
        .detect()
        .map_err(|_| BootError::SensorNotFound)?;
    let _ = writeln!(sampler.console(), "Found MPU6050 chip...");

    let sensor = sampler.sensor_mut();
    sensor
        .configure(imu_config)
        .map_err(|_| BootError::SensorConfig)?;
    let active = sensor.configuration().map_err(|_| BootError::SensorConfig)?;
    let _ = console::write_imu_config(sampler.console(), &active);

    // First reading before the layout goes up so it shows real data
    let first = sampler.run().ok();

    screen.splash().map_err(|_| BootError::DisplayUnavailable)?;
    delay.delay_ms(SPLASH_HOLD_MS).await;
    screen
        .draw_layout(&first.unwrap_or_default())
        .map_err(|_| BootError::DisplayUnavailable)?;

    Ok(BootReport {
        volume: header,
        imu: active,
        initial_read_ok: first.is_some(),
    })
}
