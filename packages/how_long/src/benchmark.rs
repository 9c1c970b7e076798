use std::fmt;

use crate::pal::PlatformFacade;
use crate::{Error, Measurement, Stopwatch};

/// A statistical micro-benchmark runner.
///
/// Invokes a function a configured number of times, timing each iteration
/// with a [`Stopwatch`], and reduces the per-iteration measurements into
/// min/max/average/total statistics with exact nanosecond arithmetic.
///
/// Warmup iterations run before the timed iterations and their timing is
/// discarded. Each call to [`run()`][Self::run] or
/// [`run_async()`][Self::run_async] is independent and produces a fresh
/// [`BenchmarkResult`]; the benchmark itself holds only configuration.
///
/// # Examples
///
/// ```
/// use how_long::Benchmark;
///
/// let result = Benchmark::new()
///     .name("string formatting")
///     .iterations(100)
///     .warmup_iterations(10)
///     .run(|| {
///         std::hint::black_box(format!("{}-{}", 1, 2));
///     })?;
///
/// assert_eq!(result.measurements().len(), 100);
/// assert!(result.min() <= result.average());
/// assert!(result.average() <= result.max());
/// # Ok::<(), how_long::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Benchmark {
    name: String,
    iterations: usize,
    warmup_iterations: usize,
    platform: PlatformFacade,
}

impl Benchmark {
    /// Creates a benchmark with the default configuration: one iteration,
    /// no warmup, named "Unnamed Benchmark".
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "Unnamed Benchmark".to_string(),
            iterations: 1,
            warmup_iterations: 0,
            platform: PlatformFacade::real(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            ..Self::new()
        }
    }

    /// Sets the display name carried into the result.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of timed iterations.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of warmup iterations executed before timing begins.
    #[must_use]
    pub fn warmup_iterations(mut self, warmup_iterations: usize) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    /// Runs the benchmark over a synchronous function.
    ///
    /// The function executes warmup-count plus iteration-count times in
    /// total; only the latter are timed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] when the configuration yields zero
    /// timed iterations.
    pub fn run<F>(&self, mut f: F) -> crate::Result<BenchmarkResult>
    where
        F: FnMut(),
    {
        for _ in 0..self.warmup_iterations {
            f();
        }

        let mut measurements = Vec::with_capacity(self.iterations);

        for _ in 0..self.iterations {
            let mut stopwatch = Stopwatch::with_platform(self.platform.clone());
            stopwatch.start()?;
            f();
            measurements.push(stopwatch.finish()?);
        }

        self.reduce(measurements)
    }

    /// Runs the benchmark over an asynchronous function.
    ///
    /// Identical protocol to [`run()`][Self::run], with every invocation
    /// awaited to completion before the next begins; iterations never
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] when the configuration yields zero
    /// timed iterations.
    pub async fn run_async<F, Fut>(&self, mut f: F) -> crate::Result<BenchmarkResult>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        for _ in 0..self.warmup_iterations {
            f().await;
        }

        let mut measurements = Vec::with_capacity(self.iterations);

        for _ in 0..self.iterations {
            let mut stopwatch = Stopwatch::with_platform(self.platform.clone());
            stopwatch.start()?;
            f().await;
            measurements.push(stopwatch.finish()?);
        }

        self.reduce(measurements)
    }

    /// Reduces per-iteration measurements into summary statistics.
    ///
    /// Min/max are pointwise over nanosecond counts, total is the exact sum
    /// and the average truncates to whole nanoseconds.
    fn reduce(&self, measurements: Vec<Measurement>) -> crate::Result<BenchmarkResult> {
        let first = *measurements.first().ok_or(Error::NoMeasurements)?;

        let mut min = first;
        let mut max = first;
        let mut total_nanos: u128 = 0;

        for measurement in &measurements {
            min = min.min(*measurement);
            max = max.max(*measurement);
            total_nanos = total_nanos.saturating_add(measurement.nanoseconds());
        }

        let count = u128::try_from(measurements.len()).expect("usize always fits in u128");

        Ok(BenchmarkResult {
            name: self.name.clone(),
            iterations: measurements.len(),
            warmup_iterations: self.warmup_iterations,
            measurements,
            min,
            max,
            average: Measurement::from_nanos(total_nanos / count),
            total: Measurement::from_nanos(total_nanos),
        })
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

/// The measurements and summary statistics produced by one benchmark run.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    name: String,
    iterations: usize,
    warmup_iterations: usize,
    measurements: Vec<Measurement>,
    min: Measurement,
    max: Measurement,
    average: Measurement,
    total: Measurement,
}

impl BenchmarkResult {
    /// The display name of the benchmark that produced this result.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of timed iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The number of warmup iterations performed before timing.
    #[must_use]
    pub fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    /// The per-iteration measurements, in iteration order. Warmup
    /// iterations are not included.
    #[must_use]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// The shortest iteration.
    #[must_use]
    pub fn min(&self) -> Measurement {
        self.min
    }

    /// The longest iteration.
    #[must_use]
    pub fn max(&self) -> Measurement {
        self.max
    }

    /// The mean iteration length, truncated to whole nanoseconds.
    #[must_use]
    pub fn average(&self) -> Measurement {
        self.average
    }

    /// The exact sum of all timed iterations.
    #[must_use]
    pub fn total(&self) -> Measurement {
        self.total
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} iterations ({} warmup); min {}, max {}, average {}, total {}",
            self.name,
            self.iterations,
            self.warmup_iterations,
            self.min,
            self.max,
            self.average,
            self.total
        )
    }
}
