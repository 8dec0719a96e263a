//! Session state: the single source of truth for "who is acting".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::identity::Identity;
use crate::role::Role;

/// Lifecycle of the authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    /// A login round-trip is in flight. Mutually exclusive with the other
    /// states; at most one attempt may be outstanding at a time.
    Pending,
    Authenticated,
    Failed,
}

/// Snapshot of the acting user's authentication state.
///
/// Mutated only through the store's named transitions; every reader works
/// on an owned copy.
///
/// # Invariants
/// - `status == Authenticated` exactly when `identity` is present.
/// - `Pending` never coexists with a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Option<Identity>,
    /// Legacy side channel: a role set without a full identity record.
    /// The resolver falls back to this after the identity's own tag.
    pub role_hint: Option<Role>,
    pub status: SessionStatus,
    pub last_error: Option<AuthError>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Fresh session, as created at process start and after logout.
    pub fn idle() -> Self {
        Self {
            identity: None,
            role_hint: None,
            status: SessionStatus::Idle,
            last_error: None,
            logged_in_at: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::idle()
    }
}
