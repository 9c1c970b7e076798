//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::pal::Platform;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    now_nanos: u128,
    memory_usage: u64,
}

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the clock and memory readings
/// instead of relying on actual system calls. Multiple clones of the same
/// `FakePlatform` share the same underlying state, allowing tests to advance
/// time after the platform has been handed to the type under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform at time zero with zero memory usage.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                now_nanos: 0,
                memory_usage: 0,
            })),
        }
    }

    /// Advances the fake monotonic clock by the given number of nanoseconds.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn advance_nanos(&self, nanos: u128) {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        state.now_nanos = state.now_nanos.saturating_add(nanos);
    }

    /// Sets the memory usage reading, in bytes.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn set_memory_usage(&self, bytes: u64) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .memory_usage = bytes;
    }
}

impl Platform for FakePlatform {
    fn monotonic_nanos(&self) -> u128 {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .now_nanos
    }

    fn memory_usage(&self) -> u64 {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .memory_usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_time_zero() {
        let platform = FakePlatform::new();

        assert_eq!(platform.monotonic_nanos(), 0);
        assert_eq!(platform.memory_usage(), 0);
    }

    #[test]
    fn advance_accumulates() {
        let platform = FakePlatform::new();

        platform.advance_nanos(100);
        platform.advance_nanos(250);

        assert_eq!(platform.monotonic_nanos(), 350);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Advancing one clone affects the other.
        platform1.advance_nanos(500);
        assert_eq!(platform2.monotonic_nanos(), 500);

        platform2.set_memory_usage(4096);
        assert_eq!(platform1.memory_usage(), 4096);
    }
}
