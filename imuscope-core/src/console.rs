//! Serial console text
//!
//! Human-readable mirror of each sample. Nothing parses this output; only
//! the presence and cadence of the three value lines matter.

use core::fmt::{self, Write};

use crate::config::ImuConfig;
use crate::sample::SensorSample;

/// First line of every sample block
pub const SAMPLE_HEADER: &str = "*** MPU6050 Values ***";

/// Write one sample block: blank line, header, three value lines
pub fn write_sample<W: Write>(out: &mut W, sample: &SensorSample) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", SAMPLE_HEADER)?;
    writeln!(out, "Temperature:   {:<6.2} °C", sample.temperature_c)?;
    writeln!(
        out,
        "Acceleration   X: {:5.2}, Y: {:5.2}, Z: {:5.2}   m/s^2",
        sample.accel.x, sample.accel.y, sample.accel.z
    )?;
    writeln!(
        out,
        "Rotation       X: {:5.2}, Y: {:5.2}, Z: {:5.2}   rad/s",
        sample.gyro.x, sample.gyro.y, sample.gyro.z
    )
}

/// Report the measurement settings read back from the sensor
pub fn write_imu_config<W: Write>(out: &mut W, config: &ImuConfig) -> fmt::Result {
    writeln!(out, "Accelerometer range set to: {}", config.accel_range)?;
    writeln!(out, "Gyro range set to: {}", config.gyro_range)?;
    writeln!(out, "Filter bandwidth set to: {}", config.filter_bandwidth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Vector3;
    use heapless::String;

    #[test]
    fn test_sample_block_lines() {
        let sample = SensorSample {
            temperature_c: 24.5,
            accel: Vector3::new(0.1, -0.2, 9.81),
            gyro: Vector3::new(0.01, 0.0, -0.01),
        };
        let mut out: String<256> = String::new();
        write_sample(&mut out, &sample).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some(SAMPLE_HEADER));
        assert_eq!(lines.next(), Some("Temperature:   24.50  °C"));
        assert_eq!(
            lines.next(),
            Some("Acceleration   X:  0.10, Y: -0.20, Z:  9.81   m/s^2")
        );
        assert_eq!(
            lines.next(),
            Some("Rotation       X:  0.01, Y:  0.00, Z: -0.01   rad/s")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_imu_config_lines() {
        let mut out: String<128> = String::new();
        write_imu_config(&mut out, &ImuConfig::default()).unwrap();
        assert!(out.contains("Accelerometer range set to: +-8G"));
        assert!(out.contains("Gyro range set to: +- 500 deg/s"));
        assert!(out.contains("Filter bandwidth set to: 21 Hz"));
    }
}
