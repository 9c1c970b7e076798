//! Integration tests for `how_long` against the real platform clock.
//!
//! These use real sleeps, so they assert generous bounds only; exact
//! arithmetic is covered by the deterministic unit tests.

use std::time::Duration;

use how_long::{Benchmark, Profiler, Stopwatch};

const SLEEP: Duration = Duration::from_millis(10);

// Scheduling jitter means a sleep can overshoot by a lot on a loaded
// machine, so upper bounds are deliberately loose.
const GENEROUS_UPPER_BOUND_NS: u128 = 5_000_000_000;

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
fn stopwatch_measures_at_least_the_sleep() {
    let mut stopwatch = Stopwatch::start_new();

    std::thread::sleep(SLEEP);

    let elapsed = stopwatch.finish().unwrap();

    assert!(
        elapsed.nanoseconds() >= SLEEP.as_nanos(),
        "expected at least {SLEEP:?}, measured {elapsed}"
    );
    assert!(elapsed.nanoseconds() < GENEROUS_UPPER_BOUND_NS);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
fn benchmark_measures_sleeping_iterations() {
    let result = Benchmark::new()
        .name("sleepy")
        .iterations(3)
        .run(|| std::thread::sleep(SLEEP))
        .unwrap();

    assert_eq!(result.measurements().len(), 3);
    assert!(result.min().nanoseconds() >= SLEEP.as_nanos());
    assert!(result.total().nanoseconds() >= 3 * SLEEP.as_nanos());
    assert!(result.min() <= result.average());
    assert!(result.average() <= result.max());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
fn async_benchmark_runs_sequentially() {
    let result = futures::executor::block_on(
        Benchmark::new().iterations(2).run_async(|| async {
            // Suspension happens only inside the measured function.
            std::thread::sleep(SLEEP);
        }),
    )
    .unwrap();

    assert_eq!(result.measurements().len(), 2);
    assert!(result.min().nanoseconds() >= SLEEP.as_nanos());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
fn profiler_end_to_end_scenario() {
    let mut profiler = Profiler::named("scenario");
    profiler.start().unwrap();

    std::thread::sleep(SLEEP);
    profiler.checkpoint("A").unwrap();

    std::thread::sleep(SLEEP);
    profiler.checkpoint("B").unwrap();

    let checkpoints = profiler.stop_named("End").unwrap();

    let names: Vec<&str> = checkpoints.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["A", "B", "End"]);

    let measurements: Vec<u128> = checkpoints
        .iter()
        .map(|c| c.measurement().nanoseconds())
        .collect();
    assert!(
        measurements.windows(2).all(|pair| pair[0] <= pair[1]),
        "checkpoint measurements must be non-decreasing: {measurements:?}"
    );

    assert!(measurements.first().copied().unwrap_or(0) >= SLEEP.as_nanos());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
fn profiler_memory_tracking_smoke_test() {
    let mut profiler = Profiler::named("memory").track_memory(true);
    profiler.start().unwrap();

    // Allocate something noticeable between checkpoints.
    let buffer = vec![0_u8; 4 * 1024 * 1024];
    profiler.checkpoint("allocated").unwrap();
    drop(buffer);

    let checkpoints = profiler.stop().unwrap();

    for checkpoint in &checkpoints {
        // Snapshots are present on every checkpoint when tracking is on.
        assert!(checkpoint.memory_usage().is_some());
        assert!(checkpoint.memory_delta().is_some());
    }

    assert_eq!(
        checkpoints.first().and_then(|c| c.memory_delta()),
        Some(0),
        "first checkpoint's delta is zero by definition"
    );
}
