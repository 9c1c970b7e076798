use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Measurement};

/// A start/finish stopwatch producing a [`Measurement`].
///
/// A stopwatch is either idle or running. Starting while running and
/// finishing while idle are contract violations surfaced as errors; the
/// stopwatch never holds more than one clock origin at a time.
///
/// The clock behind the stopwatch is a monotonic nanosecond source selected
/// when the stopwatch is constructed, so elapsed time is unaffected by wall
/// clock adjustments.
///
/// # Examples
///
/// ```
/// use how_long::Stopwatch;
///
/// let mut stopwatch = Stopwatch::start_new();
///
/// // Do some work...
/// std::thread::sleep(std::time::Duration::from_millis(10));
///
/// let elapsed = stopwatch.finish()?;
/// println!("Work completed in: {elapsed}");
/// # Ok::<(), how_long::Error>(())
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    platform: PlatformFacade,
    origin: Option<u128>,
}

impl Stopwatch {
    /// Creates an idle stopwatch.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    /// Creates a stopwatch that is already running, for call sites that
    /// want to go straight to [`finish()`][Self::finish].
    #[must_use]
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.origin = Some(stopwatch.platform.monotonic_nanos());
        stopwatch
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            origin: None,
        }
    }

    /// Whether the stopwatch currently holds a clock origin.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Records the clock origin for a new measurement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyStarted`] if a clock origin is already held.
    pub fn start(&mut self) -> crate::Result<()> {
        if self.origin.is_some() {
            return Err(Error::AlreadyStarted {
                operation: "stopwatch",
            });
        }

        self.origin = Some(self.platform.monotonic_nanos());
        Ok(())
    }

    /// Returns the elapsed time since [`start()`][Self::start] and returns
    /// the stopwatch to idle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the stopwatch is idle.
    pub fn finish(&mut self) -> crate::Result<Measurement> {
        let origin = self.origin.take().ok_or(Error::NotStarted {
            operation: "stopwatch",
        })?;

        let elapsed = self.platform.monotonic_nanos().saturating_sub(origin);
        Ok(Measurement::from_nanos(elapsed))
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
