use thiserror::Error;

/// Errors that can occur when driving measurement state machines.
///
/// All variants represent synchronous contract violations at the call site.
/// None of them are retried or recovered internally and no partial result is
/// ever produced alongside an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// `start()` was called while a measurement was already in progress.
    #[error("{operation} already started; finish or reset it before starting again")]
    AlreadyStarted {
        /// The component whose contract was violated, e.g. `stopwatch` or `profiler`.
        operation: &'static str,
    },

    /// An operation requiring a running measurement was called while idle.
    #[error("{operation} not started; call start() first")]
    NotStarted {
        /// The component whose contract was violated, e.g. `stopwatch` or `profiler`.
        operation: &'static str,
    },

    /// Statistics were requested over an empty set of measurements.
    ///
    /// The public benchmark entry points guard against this by construction,
    /// but the reduction step defends against direct misuse regardless.
    #[error("no measurements to calculate statistics from")]
    NoMeasurements,
}

/// A specialized `Result` type for measurement operations, returning the
/// crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
