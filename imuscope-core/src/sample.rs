//! Sensor sample model and shared state
//!
//! The sampling task is the only writer and the display task the only
//! reader. Both run on the same thread and are serialized by the
//! scheduler, so a `Cell` is enough: every read sees a whole sample.

use core::cell::Cell;

/// Three-axis vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One reading of the inertial sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSample {
    /// Die temperature in °C
    pub temperature_c: f32,
    /// Acceleration in m/s^2
    pub accel: Vector3,
    /// Angular rate in rad/s
    pub gyro: Vector3,
}

impl SensorSample {
    pub const ZERO: Self = Self {
        temperature_c: 0.0,
        accel: Vector3::ZERO,
        gyro: Vector3::ZERO,
    };
}

/// Validity of the value held in the shared cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadStatus {
    /// Nothing has been read yet; the sample is all zeros
    Unread,
    /// The sample came from the most recent read
    Fresh,
    /// The most recent reads failed; the sample is the last good one
    Stale { failures: u32 },
}

/// Sample plus its validity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub sample: SensorSample,
    pub status: ReadStatus,
}

impl Reading {
    pub const UNREAD: Self = Self {
        sample: SensorSample::ZERO,
        status: ReadStatus::Unread,
    };

    pub fn is_fresh(&self) -> bool {
        self.status == ReadStatus::Fresh
    }
}

/// Owner of the shared reading
pub struct SampleCell {
    reading: Cell<Reading>,
}

impl Default for SampleCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCell {
    pub const fn new() -> Self {
        Self {
            reading: Cell::new(Reading::UNREAD),
        }
    }

    /// Hand out the single writer and a reader
    ///
    /// Takes `&mut self` so only one writer can exist while the handles live.
    pub fn split(&mut self) -> (SampleWriter<'_>, SampleReader<'_>) {
        let cell = &self.reading;
        (SampleWriter { cell }, SampleReader { cell })
    }
}

/// Exclusive write handle, owned by the sampling task
pub struct SampleWriter<'a> {
    cell: &'a Cell<Reading>,
}

impl SampleWriter<'_> {
    /// Overwrite the shared reading with a fresh sample
    pub fn publish(&mut self, sample: SensorSample) {
        self.cell.set(Reading {
            sample,
            status: ReadStatus::Fresh,
        });
    }

    /// Record a failed read, keeping the last good sample
    ///
    /// Returns the number of consecutive failures.
    pub fn mark_failed(&mut self) -> u32 {
        let mut reading = self.cell.get();
        let failures = match reading.status {
            ReadStatus::Stale { failures } => failures.saturating_add(1),
            ReadStatus::Unread | ReadStatus::Fresh => 1,
        };
        reading.status = ReadStatus::Stale { failures };
        self.cell.set(reading);
        failures
    }
}

/// Read-only handle, used by the display task
#[derive(Clone, Copy)]
pub struct SampleReader<'a> {
    cell: &'a Cell<Reading>,
}

impl SampleReader<'_> {
    /// The most recently written reading
    pub fn latest(&self) -> Reading {
        self.cell.get()
    }
}
