use std::time::Duration;

/// Waits for the duration described by a human-readable string.
///
/// The returned future completes no earlier than the parsed duration; the
/// actual wait may be longer depending on timer resolution and scheduling.
/// Parsing happens before any waiting begins, so an invalid string fails
/// immediately.
///
/// Must be called from within a `tokio` runtime.
///
/// # Examples
///
/// ```
/// use in_a_bit::delay;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), in_a_bit::Error> {
/// delay("10ms").await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`][crate::Error::InvalidDuration] when
/// the string does not parse to a valid non-negative duration.
pub async fn delay(text: &str) -> crate::Result<()> {
    let duration = crate::parse(text)?;
    tokio::time::sleep(duration).await;
    Ok(())
}

/// Waits for the given number of milliseconds.
///
/// Must be called from within a `tokio` runtime.
///
/// # Examples
///
/// ```
/// use in_a_bit::sleep_ms;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// sleep_ms(10).await;
/// # }
/// ```
pub async fn sleep_ms(milliseconds: u64) {
    tokio::time::sleep(Duration::from_millis(milliseconds)).await;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn delay_waits_at_least_the_parsed_duration() {
        let start = Instant::now();

        delay("20ms").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn delay_rejects_invalid_strings_before_waiting() {
        let start = Instant::now();

        let error = delay("not a duration").await.unwrap_err();

        assert!(matches!(error, Error::InvalidDuration { .. }));
        // Rejection is immediate; no sleep happened.
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn sleep_ms_waits_at_least_the_given_time() {
        let start = Instant::now();

        sleep_ms(20).await;

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
