//! Configuration type definitions

use core::fmt;

/// Maximum number of periodic tasks the scheduler can hold
pub const MAX_TASKS: usize = 4;

/// Default sensor sampling period
pub const SAMPLE_PERIOD_MS: u64 = 1000;

/// Default display refresh period
pub const REFRESH_PERIOD_MS: u64 = 1000;

/// Splash screen hold time during boot
pub const SPLASH_HOLD_MS: u32 = 2000;

/// Cadence of the two periodic activities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Minimum time between sensor reads (ms)
    pub sample_period_ms: u64,
    /// Minimum time between display redraws (ms)
    pub refresh_period_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: SAMPLE_PERIOD_MS,
            refresh_period_ms: REFRESH_PERIOD_MS,
        }
    }
}

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    G2,
    G4,
    G8,
    G16,
}

impl fmt::Display for AccelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccelRange::G2 => "+-2G",
            AccelRange::G4 => "+-4G",
            AccelRange::G8 => "+-8G",
            AccelRange::G16 => "+-16G",
        };
        f.write_str(s)
    }
}

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    Dps250,
    Dps500,
    Dps1000,
    Dps2000,
}

impl fmt::Display for GyroRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GyroRange::Dps250 => "+- 250 deg/s",
            GyroRange::Dps500 => "+- 500 deg/s",
            GyroRange::Dps1000 => "+- 1000 deg/s",
            GyroRange::Dps2000 => "+- 2000 deg/s",
        };
        f.write_str(s)
    }
}

/// Digital low-pass filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterBandwidth {
    Hz260,
    Hz184,
    Hz94,
    Hz44,
    Hz21,
    Hz10,
    Hz5,
}

impl fmt::Display for FilterBandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = match self {
            FilterBandwidth::Hz260 => 260,
            FilterBandwidth::Hz184 => 184,
            FilterBandwidth::Hz94 => 94,
            FilterBandwidth::Hz44 => 44,
            FilterBandwidth::Hz21 => 21,
            FilterBandwidth::Hz10 => 10,
            FilterBandwidth::Hz5 => 5,
        };
        write!(f, "{} Hz", hz)
    }
}

/// Measurement configuration applied to the IMU at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuConfig {
    pub accel_range: AccelRange,
    pub gyro_range: GyroRange,
    pub filter_bandwidth: FilterBandwidth,
}

impl Default for ImuConfig {
    fn default() -> Self {
        Self {
            accel_range: AccelRange::G8,
            gyro_range: GyroRange::Dps500,
            filter_bandwidth: FilterBandwidth::Hz21,
        }
    }
}
