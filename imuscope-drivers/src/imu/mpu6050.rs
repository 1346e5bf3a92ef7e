//! MPU6050 accelerometer/gyroscope
//!
//! Blocking I2C driver. Register values are converted to SI units using
//! the full-scale range currently programmed into the chip.

use core::f32::consts::PI;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use imuscope_core::config::{AccelRange, FilterBandwidth, GyroRange, ImuConfig};
use imuscope_core::sample::{SensorSample, Vector3};
use imuscope_core::traits::ImuSensor;

/// Default I2C address (AD0 low)
pub const MPU6050_ADDR: u8 = 0x68;

/// Standard gravity in m/s^2
const STANDARD_GRAVITY: f32 = 9.80665;

/// Polls of PWR_MGMT_1 before giving up on a reset
const RESET_POLLS: u8 = 10;

#[allow(dead_code)]
mod reg {
    pub const SMPLRT_DIV: u8 = 0x19;
    pub const CONFIG: u8 = 0x1A;
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const SIGNAL_PATH_RESET: u8 = 0x68;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;

    /// PWR_MGMT_1 device reset bit
    pub const DEVICE_RESET: u8 = 0x80;
    /// PWR_MGMT_1 clock source: PLL with X gyro reference
    pub const CLOCK_PLL_XGYRO: u8 = 0x01;
    /// SIGNAL_PATH_RESET: gyro, accel and temperature paths
    pub const RESET_ALL_PATHS: u8 = 0x07;
    /// WHO_AM_I value of a genuine part
    pub const CHIP_ID: u8 = 0x68;
}

/// MPU6050 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mpu6050Error<E> {
    /// I2C transaction failed
    Bus(E),
    /// WHO_AM_I returned something other than 0x68
    WrongChip(u8),
    /// Device reset bit never cleared
    ResetTimeout,
}

/// MPU6050 on an I2C bus
pub struct Mpu6050<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    /// Last range written, used for conversion until read back
    accel_range: AccelRange,
    gyro_range: GyroRange,
}

impl<I2C: I2c, D: DelayNs> Mpu6050<I2C, D> {
    /// Create a driver at the default address
    ///
    /// Nothing is sent on the bus until [`ImuSensor::detect`].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, MPU6050_ADDR)
    }

    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            // Power-on defaults
            accel_range: AccelRange::G2,
            gyro_range: GyroRange::Dps250,
        }
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Mpu6050Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Mpu6050Error::Bus)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Mpu6050Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Mpu6050Error::Bus)
    }

    /// Read-modify-write of a bit field
    fn update_reg(
        &mut self,
        reg: u8,
        mask: u8,
        value: u8,
    ) -> Result<(), Mpu6050Error<I2C::Error>> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, (current & !mask) | (value & mask))
    }

    fn reset(&mut self) -> Result<(), Mpu6050Error<I2C::Error>> {
        self.write_reg(reg::PWR_MGMT_1, reg::DEVICE_RESET)?;

        let mut polls = 0;
        while self.read_reg(reg::PWR_MGMT_1)? & reg::DEVICE_RESET != 0 {
            polls += 1;
            if polls >= RESET_POLLS {
                return Err(Mpu6050Error::ResetTimeout);
            }
            self.delay.delay_ms(1);
        }
        self.delay.delay_ms(100);

        self.write_reg(reg::SIGNAL_PATH_RESET, reg::RESET_ALL_PATHS)?;
        self.delay.delay_ms(100);

        self.write_reg(reg::SMPLRT_DIV, 0)?;
        self.write_reg(reg::PWR_MGMT_1, reg::CLOCK_PLL_XGYRO)?;
        self.delay.delay_ms(100);

        self.accel_range = AccelRange::G2;
        self.gyro_range = GyroRange::Dps250;
        Ok(())
    }
}

impl<I2C: I2c, D: DelayNs> ImuSensor for Mpu6050<I2C, D> {
    type Error = Mpu6050Error<I2C::Error>;

    fn detect(&mut self) -> Result<(), Self::Error> {
        let id = self.read_reg(reg::WHO_AM_I)?;
        if id != reg::CHIP_ID {
            return Err(Mpu6050Error::WrongChip(id));
        }
        self.reset()
    }

    fn configure(&mut self, config: &ImuConfig) -> Result<(), Self::Error> {
        self.update_reg(reg::ACCEL_CONFIG, FS_SEL_MASK, accel_bits(config.accel_range))?;
        self.update_reg(reg::GYRO_CONFIG, FS_SEL_MASK, gyro_bits(config.gyro_range))?;
        self.update_reg(reg::CONFIG, DLPF_MASK, dlpf_bits(config.filter_bandwidth))?;
        self.accel_range = config.accel_range;
        self.gyro_range = config.gyro_range;
        Ok(())
    }

    fn configuration(&mut self) -> Result<ImuConfig, Self::Error> {
        let accel_range = accel_from_bits(self.read_reg(reg::ACCEL_CONFIG)?);
        let gyro_range = gyro_from_bits(self.read_reg(reg::GYRO_CONFIG)?);
        let filter_bandwidth = dlpf_from_bits(self.read_reg(reg::CONFIG)?);
        self.accel_range = accel_range;
        self.gyro_range = gyro_range;
        Ok(ImuConfig {
            accel_range,
            gyro_range,
            filter_bandwidth,
        })
    }

    fn read(&mut self) -> Result<SensorSample, Self::Error> {
        let mut buf = [0u8; 14];
        self.i2c
            .write_read(self.address, &[reg::ACCEL_XOUT_H], &mut buf)
            .map_err(Mpu6050Error::Bus)?;

        let word = |i: usize| i16::from_be_bytes([buf[i], buf[i + 1]]) as f32;
        let accel_scale = STANDARD_GRAVITY / accel_lsb_per_g(self.accel_range);
        let gyro_scale = (PI / 180.0) / gyro_lsb_per_dps(self.gyro_range);

        Ok(SensorSample {
            temperature_c: word(6) / 340.0 + 36.53,
            accel: Vector3::new(
                word(0) * accel_scale,
                word(2) * accel_scale,
                word(4) * accel_scale,
            ),
            gyro: Vector3::new(
                word(8) * gyro_scale,
                word(10) * gyro_scale,
                word(12) * gyro_scale,
            ),
        })
    }
}

/// FS_SEL / AFS_SEL field, bits 4:3
const FS_SEL_MASK: u8 = 0b0001_1000;
/// DLPF_CFG field, bits 2:0
const DLPF_MASK: u8 = 0b0000_0111;

fn accel_bits(range: AccelRange) -> u8 {
    let sel = match range {
        AccelRange::G2 => 0,
        AccelRange::G4 => 1,
        AccelRange::G8 => 2,
        AccelRange::G16 => 3,
    };
    sel << 3
}

fn accel_from_bits(value: u8) -> AccelRange {
    match (value & FS_SEL_MASK) >> 3 {
        0 => AccelRange::G2,
        1 => AccelRange::G4,
        2 => AccelRange::G8,
        _ => AccelRange::G16,
    }
}

fn gyro_bits(range: GyroRange) -> u8 {
    let sel = match range {
        GyroRange::Dps250 => 0,
        GyroRange::Dps500 => 1,
        GyroRange::Dps1000 => 2,
        GyroRange::Dps2000 => 3,
    };
    sel << 3
}

fn gyro_from_bits(value: u8) -> GyroRange {
    match (value & FS_SEL_MASK) >> 3 {
        0 => GyroRange::Dps250,
        1 => GyroRange::Dps500,
        2 => GyroRange::Dps1000,
        _ => GyroRange::Dps2000,
    }
}

fn dlpf_bits(bandwidth: FilterBandwidth) -> u8 {
    match bandwidth {
        FilterBandwidth::Hz260 => 0,
        FilterBandwidth::Hz184 => 1,
        FilterBandwidth::Hz94 => 2,
        FilterBandwidth::Hz44 => 3,
        FilterBandwidth::Hz21 => 4,
        FilterBandwidth::Hz10 => 5,
        FilterBandwidth::Hz5 => 6,
    }
}

fn dlpf_from_bits(value: u8) -> FilterBandwidth {
    // 7 is reserved; the chip treats it like 0
    match value & DLPF_MASK {
        1 => FilterBandwidth::Hz184,
        2 => FilterBandwidth::Hz94,
        3 => FilterBandwidth::Hz44,
        4 => FilterBandwidth::Hz21,
        5 => FilterBandwidth::Hz10,
        6 => FilterBandwidth::Hz5,
        _ => FilterBandwidth::Hz260,
    }
}

fn accel_lsb_per_g(range: AccelRange) -> f32 {
    match range {
        AccelRange::G2 => 16384.0,
        AccelRange::G4 => 8192.0,
        AccelRange::G8 => 4096.0,
        AccelRange::G16 => 2048.0,
    }
}

fn gyro_lsb_per_dps(range: GyroRange) -> f32 {
    match range {
        GyroRange::Dps250 => 131.0,
        GyroRange::Dps500 => 65.5,
        GyroRange::Dps1000 => 32.8,
        GyroRange::Dps2000 => 16.4,
    }
}
