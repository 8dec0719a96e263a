//! Read-only header projection of the session.

use sevagate_core::{Role, Session};
use sevagate_session::RoleResolver;

/// What the fixed header shows: who is acting and as which role.
///
/// Built from an owned snapshot; absent pieces render as placeholders
/// instead of panicking. The header never mutates session state, logout
/// goes through the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub display_name: Option<String>,
    pub role: Option<Role>,
    pub authenticated: bool,
}

impl HeaderSnapshot {
    pub fn from_session(session: &Session, resolver: &RoleResolver) -> Self {
        Self {
            display_name: session
                .identity
                .as_ref()
                .and_then(|identity| identity.display_name())
                .map(str::to_owned),
            role: resolver.resolve(session),
            authenticated: session.is_authenticated(),
        }
    }

    /// Role badge text; placeholder when no role resolves.
    pub fn role_badge(&self) -> String {
        self.role
            .as_ref()
            .map(|role| role.to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}
