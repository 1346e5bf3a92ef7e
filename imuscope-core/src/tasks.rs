//! Sampling task
//!
//! One blocking sensor read per invocation, published to the shared cell
//! and mirrored to the console.

use core::fmt::Write;

use crate::console;
use crate::sample::{SampleWriter, SensorSample};
use crate::traits::ImuSensor;

/// Sensor task state: the sensor, the only writer of the shared sample,
/// and the console
pub struct SamplingTask<'a, S, W> {
    sensor: S,
    writer: SampleWriter<'a>,
    console: W,
}

impl<'a, S: ImuSensor, W: Write> SamplingTask<'a, S, W> {
    pub fn new(sensor: S, writer: SampleWriter<'a>, console: W) -> Self {
        Self {
            sensor,
            writer,
            console,
        }
    }

    /// Read once and publish
    ///
    /// On failure the previous sample stays in place, marked stale, and
    /// the driver error is returned for the caller to log. Console output
    /// is best-effort.
    pub fn run(&mut self) -> Result<SensorSample, S::Error> {
        match self.sensor.read() {
            Ok(sample) => {
                self.writer.publish(sample);
                let _ = console::write_sample(&mut self.console, &sample);
                Ok(sample)
            }
            Err(e) => {
                let failures = self.writer.mark_failed();
                let _ = writeln!(self.console, "Sensor read failed ({} in a row)", failures);
                Err(e)
            }
        }
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn console(&mut self) -> &mut W {
        &mut self.console
    }
}
