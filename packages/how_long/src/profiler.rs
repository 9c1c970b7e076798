use std::time::SystemTime;

use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Measurement};

/// A named, timestamped record of elapsed time since a profiler session
/// started, optionally annotated with memory usage.
///
/// Checkpoint names are labels, not keys; several checkpoints in one
/// session may share a name.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    name: String,
    measurement: Measurement,
    timestamp: SystemTime,
    memory_usage: Option<u64>,
    memory_delta: Option<i64>,
}

impl Checkpoint {
    /// The label given when the checkpoint was recorded.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed time from session start to this checkpoint.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Wall-clock time at which the checkpoint was recorded.
    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Memory usage in bytes at this checkpoint, when memory tracking was
    /// enabled for the session.
    #[must_use]
    pub fn memory_usage(&self) -> Option<u64> {
        self.memory_usage
    }

    /// Change in memory usage since the previous checkpoint, in bytes,
    /// when memory tracking was enabled. The first checkpoint of a session
    /// always reports a delta of exactly zero.
    #[must_use]
    pub fn memory_delta(&self) -> Option<i64> {
        self.memory_delta
    }
}

/// A checkpoint-based profiler measuring elapsed time from a single start
/// point.
///
/// A profiler session is a state machine: idle until [`start()`][Self::start],
/// running while checkpoints are recorded, idle again after
/// [`stop()`][Self::stop]. All checkpoint measurements within one session
/// share the session's clock origin, so they are non-decreasing in the
/// order they were recorded.
///
/// Memory tracking is optional. When enabled, every checkpoint carries a
/// best-effort memory usage snapshot and the delta against the previous
/// snapshot. The numeric meaning of the snapshot depends on what the host
/// exposes (resident set size where available, zero otherwise), so values
/// are comparable within a session but not across hosts.
///
/// # Examples
///
/// ```
/// use how_long::Profiler;
///
/// let mut profiler = Profiler::named("startup");
/// profiler.start()?;
///
/// // ... load configuration ...
/// profiler.checkpoint("config loaded")?;
///
/// // ... open connections ...
/// profiler.checkpoint("connections open")?;
///
/// let checkpoints = profiler.stop()?;
/// assert_eq!(checkpoints.len(), 3); // Two explicit plus the final one.
/// assert_eq!(checkpoints.last().map(|c| c.name()), Some("Final"));
/// # Ok::<(), how_long::Error>(())
/// ```
#[derive(Debug)]
pub struct Profiler {
    name: String,
    track_memory: bool,
    platform: PlatformFacade,
    origin: Option<u128>,
    checkpoints: Vec<Checkpoint>,
    last_memory_usage: u64,
}

impl Profiler {
    /// Creates an idle profiler named "Profiler Session" with memory
    /// tracking disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::named("Profiler Session")
    }

    /// Creates an idle profiler with the given session name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            track_memory: false,
            platform: PlatformFacade::real(),
            origin: None,
            checkpoints: Vec::new(),
            last_memory_usage: 0,
        }
    }

    /// Creates a profiler with the given name and immediately starts it.
    #[must_use]
    pub fn start_new(name: impl Into<String>) -> Self {
        let mut profiler = Self::named(name);
        profiler.begin();
        profiler
    }

    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            ..Self::new()
        }
    }

    /// Enables or disables memory tracking for subsequent sessions.
    #[must_use]
    pub fn track_memory(mut self, track: bool) -> Self {
        self.track_memory = track;
        self
    }

    /// The session name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a session is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// All checkpoints recorded so far, in recording order.
    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// The most recently recorded checkpoint, if any.
    #[must_use]
    pub fn last_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// The first checkpoint recorded under the given name, if any.
    #[must_use]
    pub fn checkpoint_named(&self, name: &str) -> Option<&Checkpoint> {
        self.checkpoints
            .iter()
            .find(|checkpoint| checkpoint.name == name)
    }

    /// The live elapsed time since session start, without recording a
    /// checkpoint. Returns `None` while idle.
    #[must_use]
    pub fn elapsed(&self) -> Option<Measurement> {
        self.origin.map(|origin| {
            Measurement::from_nanos(self.platform.monotonic_nanos().saturating_sub(origin))
        })
    }

    /// Starts a new session.
    ///
    /// Clears any checkpoints from a previous session and, when memory
    /// tracking is enabled, snapshots the memory baseline used for the
    /// first delta computation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyStarted`] if a session is already running.
    pub fn start(&mut self) -> crate::Result<()> {
        if self.origin.is_some() {
            return Err(Error::AlreadyStarted {
                operation: "profiler",
            });
        }

        self.begin();
        Ok(())
    }

    /// Records a checkpoint measured from the session start and returns
    /// its measurement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if no session is running.
    pub fn checkpoint(&mut self, name: impl Into<String>) -> crate::Result<Measurement> {
        let origin = self.origin.ok_or(Error::NotStarted {
            operation: "profiler",
        })?;

        let measurement =
            Measurement::from_nanos(self.platform.monotonic_nanos().saturating_sub(origin));

        let (memory_usage, memory_delta) = if self.track_memory {
            let current = self.platform.memory_usage();

            // The first checkpoint's delta is zero by definition, regardless
            // of how the baseline reading compares.
            let delta = if self.checkpoints.is_empty() {
                0
            } else {
                delta_bytes(current, self.last_memory_usage)
            };

            self.last_memory_usage = current;
            (Some(current), Some(delta))
        } else {
            (None, None)
        };

        self.checkpoints.push(Checkpoint {
            name: name.into(),
            measurement,
            timestamp: SystemTime::now(),
            memory_usage,
            memory_delta,
        });

        Ok(measurement)
    }

    /// Stops the session, recording one final checkpoint named "Final",
    /// and returns the complete checkpoint sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if no session is running.
    pub fn stop(&mut self) -> crate::Result<Vec<Checkpoint>> {
        self.stop_named("Final")
    }

    /// Stops the session, recording one final checkpoint with the given
    /// name, and returns the complete checkpoint sequence.
    ///
    /// The sequence is retained and remains readable through
    /// [`checkpoints()`][Self::checkpoints] until the next
    /// [`start()`][Self::start] or [`reset()`][Self::reset].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if no session is running.
    pub fn stop_named(&mut self, final_name: impl Into<String>) -> crate::Result<Vec<Checkpoint>> {
        self.checkpoint(final_name)?;
        self.origin = None;

        Ok(self.checkpoints.clone())
    }

    /// Returns the profiler to idle, clearing the checkpoint sequence, the
    /// clock origin and the memory baseline. Valid in any state.
    pub fn reset(&mut self) {
        self.origin = None;
        self.checkpoints.clear();
        self.last_memory_usage = 0;
    }

    fn begin(&mut self) {
        self.origin = Some(self.platform.monotonic_nanos());
        self.checkpoints.clear();

        if self.track_memory {
            self.last_memory_usage = self.platform.memory_usage();
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed difference between two memory readings, saturating at the `i64`
/// range bounds.
fn delta_bytes(current: u64, previous: u64) -> i64 {
    if current >= previous {
        i64::try_from(current - previous).unwrap_or(i64::MAX)
    } else {
        i64::try_from(previous - current).map_or(i64::MIN, |magnitude| -magnitude)
    }
}
