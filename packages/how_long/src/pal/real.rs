//! Real platform implementation backed by the operating system.

use std::time::Instant;

use crate::pal::Platform;

/// Real implementation of the platform abstraction.
///
/// Monotonic time is anchored on an [`Instant`] captured when the platform is
/// created, so readings are whole nanoseconds elapsed since that anchor.
/// Clones share the same anchor, keeping readings from clones comparable.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealPlatform {
    anchor: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn monotonic_nanos(&self) -> u128 {
        self.anchor.elapsed().as_nanos()
    }

    fn memory_usage(&self) -> u64 {
        memory_usage_bytes()
    }
}

/// Resident set size of the current process, from `/proc/self/statm`.
///
/// Returns zero when the file cannot be read or parsed, per the documented
/// best-effort contract.
#[cfg(target_os = "linux")]
fn memory_usage_bytes() -> u64 {
    let Ok(statm) = std::fs::read_to_string("/proc/self/statm") else {
        return 0;
    };

    // Second whitespace-separated field is the resident set size, in pages.
    let Some(resident_pages) = statm
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.parse::<u64>().ok())
    else {
        return 0;
    };

    // SAFETY: sysconf has no preconditions; it only reads process configuration.
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

    u64::try_from(page_size).map_or(0, |page_size| resident_pages.saturating_mul(page_size))
}

/// Working set size of the current process, from the process status API.
///
/// Returns zero when the counters cannot be queried, per the documented
/// best-effort contract.
#[cfg(windows)]
fn memory_usage_bytes() -> u64 {
    use windows::Win32::System::ProcessStatus::{
        K32GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS,
    };
    use windows::Win32::System::Threading::GetCurrentProcess;

    let mut counters = PROCESS_MEMORY_COUNTERS::default();

    let Ok(len) = u32::try_from(size_of::<PROCESS_MEMORY_COUNTERS>()) else {
        return 0;
    };

    // SAFETY: `counters` is a valid writable PROCESS_MEMORY_COUNTERS and
    // `len` is its exact size in bytes, as the API requires.
    let succeeded = unsafe { K32GetProcessMemoryInfo(GetCurrentProcess(), &mut counters, len) };

    if succeeded.as_bool() {
        u64::try_from(counters.WorkingSetSize).unwrap_or(0)
    } else {
        0
    }
}

/// No process-level memory counter is available on this platform.
#[cfg(not(any(target_os = "linux", windows)))]
fn memory_usage_bytes() -> u64 {
    0
}
