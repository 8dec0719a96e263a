//! `sevagate-client` — network collaborator for login and signup.
//!
//! The portal core only consumes the *result* shapes; everything about the
//! transport lives here. Credentials are validated locally before any
//! round-trip is attempted.

pub mod api;
pub mod dto;
pub mod error;
pub mod http;
pub mod mock;

pub use api::AuthApi;
pub use dto::{
    AdminCredentials, CitizenCredentials, LoginOutcome, LoginRequest, SignupOutcome,
    SignupRequest, validate_aadhaar, validate_mobile,
};
pub use error::ClientError;
pub use http::HttpAuthApi;
pub use mock::MockAuthApi;
