//! Periodic task state

/// Identity of a registered task (its registration index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How many times a task runs once enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Iterations {
    /// Run until disabled
    Forever,
    /// Run this many times, then disable
    Times(u32),
}

/// Execution statistics for one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskStats {
    /// Number of callback invocations
    pub runs: u32,
    /// Largest observed delay between due time and invocation (ms)
    pub max_lateness_ms: u64,
}

/// A callback with a minimum period between invocations
pub struct PeriodicTask<'a> {
    period_ms: u64,
    callback: &'a mut dyn FnMut(),
    next_due_ms: u64,
    enabled: bool,
    iterations: Iterations,
    /// Runs left in the current enable cycle (finite tasks only)
    remaining: u32,
    stats: TaskStats,
}

impl<'a> PeriodicTask<'a> {
    /// Create a disabled task
    pub(crate) fn new(period_ms: u64, iterations: Iterations, callback: &'a mut dyn FnMut()) -> Self {
        Self {
            period_ms,
            callback,
            next_due_ms: 0,
            enabled: false,
            iterations,
            remaining: 0,
            stats: TaskStats::default(),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn stats(&self) -> TaskStats {
        self.stats
    }

    /// Enable at `now_ms`; the first run is one period later
    ///
    /// Enabling an already enabled task does not move its due time.
    pub(crate) fn enable(&mut self, now_ms: u64) {
        if self.enabled {
            return;
        }
        if let Iterations::Times(n) = self.iterations {
            if n == 0 {
                return;
            }
            self.remaining = n;
        }
        self.enabled = true;
        self.next_due_ms = now_ms.saturating_add(self.period_ms);
    }

    pub(crate) fn disable(&mut self) {
        self.enabled = false;
    }

    /// Run the callback if the task is enabled and due
    ///
    /// The next due time is measured from `now_ms`, not from the previous
    /// due time, so a late run pushes later runs back instead of bunching
    /// them up.
    pub(crate) fn poll(&mut self, now_ms: u64) -> bool {
        if !self.enabled || now_ms < self.next_due_ms {
            return false;
        }

        (self.callback)();

        let lateness = now_ms - self.next_due_ms;
        self.stats.runs = self.stats.runs.saturating_add(1);
        self.stats.max_lateness_ms = self.stats.max_lateness_ms.max(lateness);
        self.next_due_ms = now_ms.saturating_add(self.period_ms);

        if let Iterations::Times(_) = self.iterations {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.enabled = false;
            }
        }

        true
    }
}
