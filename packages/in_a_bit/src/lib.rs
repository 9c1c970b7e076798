//! Human-readable duration strings and the async delays they describe.
//!
//! This package parses strings like `100ms`, `1.5s` or `2 min` into
//! [`std::time::Duration`] values, and provides [`delay()`] which awaits
//! for the duration a string describes. A bare number means milliseconds.
//!
//! # Unit table
//!
//! | Unit | Spellings |
//! |------|-----------|
//! | milliseconds | *(none)*, `ms`, `msec`, `msecs`, `millisecond`, `milliseconds` |
//! | seconds | `s`, `sec`, `secs`, `second`, `seconds` |
//! | minutes | `m`, `min`, `mins`, `minute`, `minutes` |
//! | hours | `h`, `hr`, `hrs`, `hour`, `hours` |
//! | days | `d`, `day`, `days` |
//! | weeks | `w`, `week`, `weeks` |
//! | years | `y`, `yr`, `yrs`, `year`, `years` *(365.25 days)* |
//!
//! # Example
//!
//! ```
//! use in_a_bit::{delay, parse};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), in_a_bit::Error> {
//! assert_eq!(parse("1.5s")?, std::time::Duration::from_millis(1500));
//!
//! delay("10ms").await?;
//! # Ok(())
//! # }
//! ```

mod delay;
mod error;
mod parse;

pub use delay::{delay, sleep_ms};
pub use error::Error;
pub use parse::parse;

pub(crate) use error::Result;
