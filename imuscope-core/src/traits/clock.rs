//! Monotonic millisecond clock

/// Source of wall-clock time for the scheduler
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin, never decreasing
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
