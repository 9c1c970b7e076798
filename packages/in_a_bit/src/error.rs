use thiserror::Error;

/// Errors that can occur when processing duration strings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a supposed duration string but it did not
    /// describe a valid non-negative duration.
    #[error("invalid duration: '{invalid_value}' is invalid: {problem}")]
    InvalidDuration {
        /// The specific value that was invalid. This may either be the entire
        /// duration string or a specific part of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

impl Error {
    pub(crate) fn new(invalid_value: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::InvalidDuration {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
        }
    }
}

/// A specialized `Result` type for duration string operations, returning the
/// crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
