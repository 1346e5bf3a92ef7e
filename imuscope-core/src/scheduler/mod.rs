//! Cooperative periodic task scheduler
//!
//! Runs callbacks at fixed minimum periods from a polling loop. There is
//! no preemption and no blocking wait: the owner calls
//! [`Scheduler::tick`] as often as it can.

pub mod executor;
pub mod task;

pub use executor::{Scheduler, SchedulerError};
pub use task::{Iterations, PeriodicTask, TaskId, TaskStats};
