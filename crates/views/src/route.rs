use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Navigable route path, matched exactly (e.g. `/admin/report`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// Normalizes to a single leading slash.
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        let raw = path.into();
        if raw.starts_with('/') {
            Self(raw)
        } else {
            Self(Cow::Owned(format!("/{raw}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RoutePath {
    fn from(path: &'static str) -> Self {
        Self::new(path)
    }
}
