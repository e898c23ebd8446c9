//! Internal-error type for invariant violations.

/// An internal error indicating a bug in ramsmith, not a user input problem.
///
/// These errors should never occur during normal operation. The path
/// constructor returns one when a structural invariant it maintains (for
/// example "every processed path is grounded at a pin of the current
/// reference module") would be violated.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
