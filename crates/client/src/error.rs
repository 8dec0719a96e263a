use thiserror::Error;

/// Failures of the client collaborator.
///
/// A backend rejecting credentials is *not* a `ClientError`: that is a
/// successful round-trip whose outcome says `success == false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input failed local validation; nothing was sent.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// Transport-level failure (DNS, connect, timeout).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with something we could not interpret.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The backend refused the request outright (non-success status with
    /// no interpretable body).
    #[error("rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
