//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `how_long` package `README.md`.

fn main() -> Result<(), how_long::Error> {
    use how_long::{Benchmark, Profiler, Stopwatch};

    // Time a single piece of work.
    let mut stopwatch = Stopwatch::start_new();
    std::thread::sleep(std::time::Duration::from_millis(10));
    let elapsed = stopwatch.finish()?;
    println!("Work completed in: {elapsed}");

    // Benchmark a function with warmup.
    let result = Benchmark::new()
        .name("formatting")
        .iterations(100)
        .warmup_iterations(10)
        .run(|| {
            std::hint::black_box(format!("{}-{}", 1, 2));
        })?;
    println!("{result}");

    // Profile a multi-step operation.
    let mut profiler = Profiler::named("startup");
    profiler.start()?;
    std::thread::sleep(std::time::Duration::from_millis(5));
    profiler.checkpoint("step one")?;
    std::thread::sleep(std::time::Duration::from_millis(5));
    profiler.checkpoint("step two")?;

    for checkpoint in profiler.stop()? {
        println!("{}: {}", checkpoint.name(), checkpoint.measurement());
    }

    Ok(())
}
