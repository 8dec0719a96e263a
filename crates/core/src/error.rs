//! Authentication error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of an authentication failure.
///
/// Access denials are deliberately *not* represented here: a denial is a
/// routing decision, not an error (see the access gate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    /// The backend rejected the credentials. Recoverable; the user retries.
    AuthRejected,
    /// The round-trip itself failed. Transient; retry allowed.
    NetworkFailure,
}

impl core::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthErrorKind::AuthRejected => f.write_str("auth rejected"),
            AuthErrorKind::NetworkFailure => f.write_str("network failure"),
        }
    }
}

/// Structured authentication failure, stored in the session's `last_error`
/// so the login form can surface it inline and clear it independently of a
/// retry.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::AuthRejected,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::NetworkFailure,
            message: message.into(),
        }
    }
}
