//! Polling scheduler
//!
//! Holds the registered tasks in registration order and runs the due ones
//! on every tick. Tasks are registered during setup; once the first tick
//! has happened the task list is frozen.

use heapless::Vec;

use super::task::{Iterations, PeriodicTask, TaskId, TaskStats};
use crate::config::MAX_TASKS;
use crate::traits::Clock;

/// Errors from task registration and control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// Task list is at capacity
    Full,
    /// Tasks cannot be added after the first tick
    AlreadyStarted,
    /// A period of zero would run the task on every tick
    ZeroPeriod,
    /// No task with this id
    UnknownTask,
}

/// Cooperative periodic task scheduler
///
/// `N` bounds the number of tasks; the list lives inline with no heap.
pub struct Scheduler<'a, C, const N: usize = MAX_TASKS> {
    clock: C,
    tasks: Vec<PeriodicTask<'a>, N>,
    started: bool,
}

impl<'a, C: Clock, const N: usize> Scheduler<'a, C, N> {
    /// Create an empty scheduler reading time from `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: Vec::new(),
            started: false,
        }
    }

    /// Register a task; it stays disabled until enabled
    pub fn add_task(
        &mut self,
        period_ms: u64,
        iterations: Iterations,
        callback: &'a mut dyn FnMut(),
    ) -> Result<TaskId, SchedulerError> {
        if self.started {
            return Err(SchedulerError::AlreadyStarted);
        }
        if period_ms == 0 {
            return Err(SchedulerError::ZeroPeriod);
        }

        let id = TaskId(self.tasks.len());
        self.tasks
            .push(PeriodicTask::new(period_ms, iterations, callback))
            .map_err(|_| SchedulerError::Full)?;
        Ok(id)
    }

    /// Enable every registered task
    pub fn enable_all(&mut self) {
        let now = self.clock.now_ms();
        for task in self.tasks.iter_mut() {
            task.enable(now);
        }
    }

    /// Enable one task; its first run is one period from now
    pub fn enable(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let now = self.clock.now_ms();
        self.task_mut(id)?.enable(now);
        Ok(())
    }

    /// Disable one task; it is skipped until enabled again
    pub fn disable(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        self.task_mut(id)?.disable();
        Ok(())
    }

    pub fn is_enabled(&self, id: TaskId) -> Result<bool, SchedulerError> {
        self.task(id).map(PeriodicTask::is_enabled)
    }

    pub fn stats(&self, id: TaskId) -> Result<TaskStats, SchedulerError> {
        self.task(id).map(PeriodicTask::stats)
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every enabled task that is due, in registration order
    ///
    /// The clock is read again before each task so time spent in an
    /// earlier callback counts toward the later ones. Returns the number
    /// of callbacks invoked.
    pub fn tick(&mut self) -> usize {
        self.started = true;

        let mut ran = 0;
        for task in self.tasks.iter_mut() {
            let now = self.clock.now_ms();
            if task.poll(now) {
                ran += 1;
            }
        }
        ran
    }

    /// Tick forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    fn task(&self, id: TaskId) -> Result<&PeriodicTask<'a>, SchedulerError> {
        self.tasks.get(id.index()).ok_or(SchedulerError::UnknownTask)
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut PeriodicTask<'a>, SchedulerError> {
        self.tasks
            .get_mut(id.index())
            .ok_or(SchedulerError::UnknownTask)
    }
}
