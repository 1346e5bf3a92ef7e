//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in imuscope-core:
//!
//! - MPU6050 6-axis IMU over I2C

#![no_std]
#![deny(unsafe_code)]

pub mod imu;
