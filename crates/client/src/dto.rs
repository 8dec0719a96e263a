//! Wire shapes for the login/signup collaborator.
//!
//! Field names match the portal backend's camelCase JSON. Two credential
//! shapes exist: administrative staff sign in with username/password,
//! citizens with mobile + Aadhaar numbers.

use serde::{Deserialize, Serialize};

use sevagate_core::{AuthError, AuthErrorKind, Identity};

use crate::error::ClientError;

/// Mobile numbers are exactly 10 digits.
pub fn validate_mobile(raw: &str) -> Result<(), ClientError> {
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ClientError::invalid("mobile number must be exactly 10 digits"))
    }
}

/// Aadhaar numbers are exactly 12 digits.
pub fn validate_aadhaar(raw: &str) -> Result<(), ClientError> {
    if raw.len() == 12 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ClientError::invalid("Aadhaar number must be exactly 12 digits"))
    }
}

/// Credentials for administrative staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    pub user_name: String,
    pub password: String,
    pub ip: String,
}

/// Credentials for citizens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenCredentials {
    pub mobile_number: String,
    pub aadhar_number: String,
    pub ip: String,
}

/// Login request, tagged by user type the way the backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "userType")]
pub enum LoginRequest {
    #[serde(rename = "admin")]
    Admin(AdminCredentials),
    #[serde(rename = "user")]
    Citizen(CitizenCredentials),
}

impl LoginRequest {
    pub fn admin(
        user_name: impl Into<String>,
        password: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self::Admin(AdminCredentials {
            user_name: user_name.into(),
            password: password.into(),
            ip: ip.into(),
        })
    }

    /// Citizen login; validates the number formats before anything is sent.
    pub fn citizen(
        mobile_number: impl Into<String>,
        aadhar_number: impl Into<String>,
        ip: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let mobile_number = mobile_number.into();
        let aadhar_number = aadhar_number.into();
        validate_mobile(&mobile_number)?;
        validate_aadhaar(&aadhar_number)?;
        Ok(Self::Citizen(CitizenCredentials {
            mobile_number,
            aadhar_number,
            ip: ip.into(),
        }))
    }
}

/// Result of a login round-trip, consumed by the session store to drive
/// its terminal transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<AuthErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginOutcome {
    pub fn succeeded(identity: Identity) -> Self {
        Self {
            success: true,
            identity: Some(identity),
            error_kind: None,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            identity: None,
            error_kind: Some(AuthErrorKind::AuthRejected),
            message: Some(message.into()),
        }
    }

    /// Collapse into the store's terminal-transition input.
    pub fn into_result(self) -> Result<Identity, AuthError> {
        if self.success {
            self.identity
                .ok_or_else(|| AuthError::rejected("login succeeded without an identity payload"))
        } else {
            Err(AuthError {
                kind: self.error_kind.unwrap_or(AuthErrorKind::AuthRejected),
                message: self.message.unwrap_or_else(|| "login failed".to_string()),
            })
        }
    }
}

/// New-citizen registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub mobile_no: String,
    pub adhar_no: String,
    pub name: String,
    pub district_id: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_mobile(&self.mobile_no)?;
        validate_aadhaar(&self.adhar_no)?;
        if self.name.trim().is_empty() {
            return Err(ClientError::invalid("name cannot be empty"));
        }
        Ok(())
    }
}

/// Signup result; a successful registration carries the number the citizen
/// must keep for later reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutcome {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SignupOutcome {
    pub fn registered(registration_no: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            registration_no: Some(registration_no.into()),
            message: None,
        }
    }

    pub fn into_result(self) -> Result<String, ClientError> {
        if self.status == "success" {
            self.registration_no.ok_or_else(|| {
                ClientError::Malformed("signup succeeded without a registration number".to_string())
            })
        } else {
            Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| "signup failed".to_string()),
            ))
        }
    }
}
