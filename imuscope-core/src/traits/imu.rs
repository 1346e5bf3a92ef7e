//! Inertial measurement unit trait

use crate::config::ImuConfig;
use crate::sample::SensorSample;

/// Trait for 6-axis inertial sensors with a temperature channel
///
/// Implementations handle the bus protocol and unit conversion. All
/// operations block until the bus transaction completes.
pub trait ImuSensor {
    /// Error type for bus or identification failures
    type Error;

    /// Check that the expected chip answers and reset it
    fn detect(&mut self) -> Result<(), Self::Error>;

    /// Apply measurement range and filter settings
    fn configure(&mut self, config: &ImuConfig) -> Result<(), Self::Error>;

    /// Read back the settings currently active on the chip
    fn configuration(&mut self) -> Result<ImuConfig, Self::Error>;

    /// Read temperature, acceleration and angular rate in SI units
    fn read(&mut self) -> Result<SensorSample, Self::Error>;
}
