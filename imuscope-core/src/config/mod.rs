//! Configuration types
//!
//! All configuration is fixed at compile time. The firmware uses the
//! defaults; tests construct their own values.

pub mod types;

pub use types::*;
