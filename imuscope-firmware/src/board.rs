//! Board wiring
//!
//! Raspberry Pi Pico with an MPU6050 breakout and a 2.0" ST7789 module.
//!
//! | Signal       | GPIO | Peripheral |
//! |--------------|------|------------|
//! | Console TX   | 0    | UART0      |
//! | IMU SDA      | 4    | I2C0       |
//! | IMU SCL      | 5    | I2C0       |
//! | TFT DC       | 8    |            |
//! | TFT CS       | 9    |            |
//! | TFT SCK      | 10   | SPI1       |
//! | TFT MOSI     | 11   | SPI1       |
//! | TFT RST      | 12   |            |
//! | TFT BL       | 13   |            |

/// Serial console baud rate
pub const CONSOLE_BAUD: u32 = 115_200;

/// IMU bus clock
pub const I2C_FREQUENCY: u32 = 400_000;

/// TFT SPI clock
pub const SPI_FREQUENCY: u32 = 32_000_000;

/// Font requested for the TFT
pub const FONT_NAME: &str = "10x20";

/// Interval between repeats of a boot diagnostic
pub const HALT_REPEAT_MS: u64 = 500;
