//! Authenticated identity shapes.
//!
//! The portal backend has shipped two shapes over time: a bare role string
//! (older endpoints) and a profile record. Both are accepted here and
//! normalized by the role resolver; nothing else may branch on the shape.

use serde::{Deserialize, Serialize};

/// Profile record returned for a full login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
}

/// The shapes in which the backend reports "who is acting".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Legacy shape: the identity *is* the role tag.
    Bare(String),
    Profile(Profile),
}

impl Identity {
    /// Raw role tag carried by this identity, if any.
    pub fn role_tag(&self) -> Option<&str> {
        match self {
            Identity::Bare(tag) => Some(tag),
            Identity::Profile(profile) => profile.role.as_deref(),
        }
    }

    /// Human-readable name, when the shape carries one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Identity::Bare(_) => None,
            Identity::Profile(profile) => Some(profile.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_deserializes_as_role_tag() {
        let identity: Identity = serde_json::from_str(r#""Secretary-Login""#).unwrap();
        assert_eq!(identity.role_tag(), Some("Secretary-Login"));
        assert_eq!(identity.display_name(), None);
    }

    #[test]
    fn profile_object_deserializes_with_optional_fields() {
        let identity: Identity =
            serde_json::from_str(r#"{"name":"A. Kumar","role":"user-login"}"#).unwrap();
        assert_eq!(identity.role_tag(), Some("user-login"));
        assert_eq!(identity.display_name(), Some("A. Kumar"));
    }

    #[test]
    fn profile_without_role_field_has_no_tag() {
        let identity: Identity = serde_json::from_str(r#"{"name":"A. Kumar"}"#).unwrap();
        assert_eq!(identity.role_tag(), None);
        assert_eq!(identity.display_name(), Some("A. Kumar"));
    }
}
