//! Nanosecond-precision time measurement utilities.
//!
//! This package provides a small toolkit for measuring how long things take:
//!
//! - [`Measurement`] - an immutable nanosecond-precision duration value with
//!   exact arithmetic, total ordering and multi-format string rendering
//! - [`Stopwatch`] - a start/finish stopwatch producing measurements
//! - [`Benchmark`] - a statistical micro-benchmark runner for sync and async
//!   functions
//! - [`Profiler`] - a checkpoint-based profiler with optional memory-delta
//!   tracking
//!
//! All elapsed-time readings come from a monotonic clock selected once at
//! construction time, so measurements are unaffected by wall clock
//! adjustments. The library introduces no parallelism and no suspension of
//! its own; async code only suspends where the measured function itself does.
//!
//! There is no guarantee of true nanosecond hardware resolution - the
//! underlying clock's resolution is a platform fact outside this package's
//! control.
//!
//! # Measuring elapsed time
//!
//! ```
//! use how_long::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::start_new();
//!
//! // Do some work...
//! std::thread::sleep(std::time::Duration::from_millis(10));
//!
//! let elapsed = stopwatch.finish()?;
//! println!("Work completed in: {elapsed}");
//! # Ok::<(), how_long::Error>(())
//! ```
//!
//! # Benchmarking a function
//!
//! ```
//! use how_long::Benchmark;
//!
//! let result = Benchmark::new()
//!     .name("vector push")
//!     .iterations(50)
//!     .warmup_iterations(5)
//!     .run(|| {
//!         let mut values = Vec::new();
//!         for i in 0..100 {
//!             values.push(i);
//!         }
//!         std::hint::black_box(values);
//!     })?;
//!
//! println!("{result}");
//! # Ok::<(), how_long::Error>(())
//! ```
//!
//! # Profiling a multi-step operation
//!
//! ```
//! use how_long::Profiler;
//!
//! let mut profiler = Profiler::named("request handling").track_memory(true);
//! profiler.start()?;
//!
//! // ... parse the request ...
//! profiler.checkpoint("parsed")?;
//!
//! // ... produce the response ...
//! profiler.checkpoint("responded")?;
//!
//! for checkpoint in profiler.stop()? {
//!     println!("{}: {}", checkpoint.name(), checkpoint.measurement());
//! }
//! # Ok::<(), how_long::Error>(())
//! ```

mod benchmark;
mod error;
mod measurement;
mod pal;
mod profiler;
mod stopwatch;

pub use benchmark::{Benchmark, BenchmarkResult};
pub use error::Error;
pub use measurement::{Measurement, TimeFormat, TimeOfDay};
pub use profiler::{Checkpoint, Profiler};
pub use stopwatch::Stopwatch;

pub(crate) use error::Result;
