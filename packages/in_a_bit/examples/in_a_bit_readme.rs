//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `in_a_bit` package `README.md`.

use in_a_bit::{delay, parse};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), in_a_bit::Error> {
    assert_eq!(parse("1.5s")?, std::time::Duration::from_millis(1500));

    // Completes no earlier than 100 milliseconds from now.
    delay("100ms").await?;

    println!("and we're back");
    Ok(())
}
