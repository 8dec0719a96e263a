//! `sevagate-core` — pure domain primitives for the portal's session gate.
//!
//! This crate contains **pure domain** types (no IO, no async). The session
//! store, the access gate and the network client all build on these.

pub mod error;
pub mod identity;
pub mod role;
pub mod session;

pub use error::{AuthError, AuthErrorKind};
pub use identity::{Identity, Profile};
pub use role::Role;
pub use session::{Session, SessionStatus};
