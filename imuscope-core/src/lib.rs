//! Board-agnostic core logic for the sensor display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor sample model and the single-writer shared sample cell
//! - Cooperative periodic task scheduler
//! - Sampling task and its console mirror
//! - Boot sequence with fail-stop errors
//! - Hardware abstraction traits (IMU, clock, screen)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod boot;
pub mod config;
pub mod console;
pub mod sample;
pub mod scheduler;
pub mod tasks;
pub mod traits;

pub use sample::{Reading, ReadStatus, SampleCell, SampleReader, SampleWriter, SensorSample, Vector3};
