use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Canonical role tag deciding which views and paths a session may access.
///
/// Roles are opaque strings at this layer; the resolver's allow-list decides
/// which tags are recognized. Unrecognized tags resolve to "no role", never
/// to a default elevated role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}
