//! Role normalization.
//!
//! The backend has reported roles in three shapes over time: a bare string
//! identity, a role field on the profile, and a role set next to the
//! identity. They are all normalized here, once; nothing downstream may
//! branch on shape.

use std::collections::HashSet;

use sevagate_core::{Identity, Role, Session};

/// Pure mapping from a session to its canonical role.
#[derive(Debug, Clone)]
pub struct RoleResolver {
    allowed: HashSet<Role>,
}

impl RoleResolver {
    /// Resolver recognizing exactly the given role tags.
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Resolve the canonical role for a session.
    ///
    /// Precedence: bare-string identity, then the profile's role field,
    /// then the legacy `role_hint`. Tags outside the allow-list resolve to
    /// `None` (fail-closed, never a default role). Total: absent and
    /// malformed shapes are expected inputs, not errors.
    pub fn resolve(&self, session: &Session) -> Option<Role> {
        let hint = session.role_hint.as_ref().map(Role::as_str);
        let tag = match &session.identity {
            Some(Identity::Bare(tag)) => Some(tag.as_str()),
            Some(Identity::Profile(profile)) => profile.role.as_deref().or(hint),
            None => hint,
        }?;

        let role = Role::new(tag.to_owned());
        self.allowed.contains(&role).then_some(role)
    }
}
