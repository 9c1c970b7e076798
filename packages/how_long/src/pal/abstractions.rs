//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides the raw readings that measurement types are built on.
///
/// This trait abstracts the underlying platform-specific clock and memory
/// counters, allowing for both real implementations (using system calls)
/// and fake implementations (for testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Current monotonic time, as whole nanoseconds since an arbitrary but
    /// fixed origin. Readings from the same platform instance are comparable
    /// and never decrease.
    fn monotonic_nanos(&self) -> u128;

    /// Best-effort memory usage of the current process, in bytes.
    ///
    /// The numeric meaning depends on the source the platform could reach:
    /// resident set size where a process-level counter exists, zero where
    /// no counter is available at all. Values from different hosts are not
    /// comparable with each other.
    fn memory_usage(&self) -> u64;
}
