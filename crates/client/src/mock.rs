//! Scripted collaborator for tests and the demo binary.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::api::AuthApi;
use crate::dto::{LoginOutcome, LoginRequest, SignupOutcome, SignupRequest};
use crate::error::ClientError;

/// Backend double that replays scripted outcomes in order.
///
/// An optional latency simulates the network round-trip, which is what
/// cancellation tests need: a `clear()` can land while the "request" is
/// still sleeping. An empty script answers with a rejection (fail-closed)
/// rather than panicking.
#[derive(Debug, Default)]
pub struct MockAuthApi {
    logins: Mutex<VecDeque<Result<LoginOutcome, ClientError>>>,
    signups: Mutex<VecDeque<Result<SignupOutcome, ClientError>>>,
    latency: Option<Duration>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn push_login(&self, outcome: Result<LoginOutcome, ClientError>) {
        lock(&self.logins).push_back(outcome);
    }

    pub fn push_signup(&self, outcome: Result<SignupOutcome, ClientError>) {
        lock(&self.signups).push_back(outcome);
    }

    /// Number of scripted login outcomes not yet consumed.
    pub fn pending_logins(&self) -> usize {
        lock(&self.logins).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl AuthApi for MockAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginOutcome, ClientError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        lock(&self.logins)
            .pop_front()
            .unwrap_or_else(|| Ok(LoginOutcome::rejected("no scripted login outcome")))
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<SignupOutcome, ClientError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        lock(&self.signups).pop_front().unwrap_or_else(|| {
            Err(ClientError::Rejected("no scripted signup outcome".to_string()))
        })
    }
}
