//! RP2040 implementations of the imuscope HAL traits
//!
//! - [`flash::Rp2040FlashStorage`] - wear-leveled storage volume partition
//! - [`uart::Rp2040UartTx`] - blocking console transmitter

#![no_std]

pub mod flash;
pub mod uart;

pub use flash::Rp2040FlashStorage;
pub use uart::Rp2040UartTx;
