//! Collaborator contract for the authentication backend.

use crate::dto::{LoginOutcome, LoginRequest, SignupOutcome, SignupRequest};
use crate::error::ClientError;

/// Network collaborator performing the login/signup calls.
///
/// `Err` means the round-trip itself failed; a backend rejection is a
/// successful round-trip whose outcome says so. The caller decides how
/// either maps onto session state.
pub trait AuthApi: Send + Sync {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginOutcome, ClientError>> + Send;

    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<SignupOutcome, ClientError>> + Send;
}
