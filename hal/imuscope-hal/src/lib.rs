//! imuscope Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the firmware needs
//! beyond what `embedded-hal` already covers. Chip-specific HALs implement
//! them, which keeps the boot sequence and the console testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (imuscope-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  imuscope-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ imuscope-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Serial transmit, wrapped by [`uart::SerialConsole`]
//! - [`flash::FlashStorage`] - Persistent key-value storage
//! - [`volume::StorageVolume`] - Mountable storage volume

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod uart;
pub mod volume;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use uart::{SerialConsole, UartTx};
pub use volume::{StorageVolume, Volume, VolumeError, VolumeHeader};
