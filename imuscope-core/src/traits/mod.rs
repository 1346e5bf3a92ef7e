//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod clock;
pub mod imu;
pub mod screen;

pub use clock::Clock;
pub use imu::ImuSensor;
pub use screen::Screen;
