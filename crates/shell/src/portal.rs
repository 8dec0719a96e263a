//! Shell wiring: stores, gate, client, and the high-level flows.

use std::sync::Arc;

use sevagate_client::{AuthApi, ClientError, LoginRequest, SignupRequest};
use sevagate_core::{AuthError, Session};
use sevagate_gate::{AccessGate, Navigation};
use sevagate_session::{LoadingSignal, RoleResolver, SessionError, SessionStore};
use sevagate_views::{RegistryError, RoutePath, ViewLoadError, ViewRegistry};

use crate::header::HeaderSnapshot;
use crate::routes;

/// The hosting shell: owns the stores and drives every flow through their
/// named operations. One instance per logical user session.
pub struct PortalShell<A> {
    loading: Arc<LoadingSignal>,
    store: Arc<SessionStore>,
    resolver: RoleResolver,
    gate: AccessGate,
    api: A,
}

impl<A: AuthApi> PortalShell<A> {
    /// Shell over the default portal route table.
    pub fn new(api: A) -> Result<Self, RegistryError> {
        let registry = Arc::new(routes::default_registry()?);
        Ok(Self::with_registry(api, registry))
    }

    /// Shell over a caller-supplied route table (tests, embedded hosts).
    pub fn with_registry(api: A, registry: Arc<ViewRegistry>) -> Self {
        let loading = Arc::new(LoadingSignal::new());
        let store = Arc::new(SessionStore::new(Arc::clone(&loading)));
        let resolver = RoleResolver::new(routes::allowed_roles());
        let gate = AccessGate::new(
            Arc::clone(&store),
            resolver.clone(),
            registry,
            RoutePath::new(routes::LOGIN_PATH),
        );
        Self {
            loading,
            store,
            resolver,
            gate,
            api,
        }
    }

    /// Run one login round-trip.
    ///
    /// The returned snapshot reflects the terminal state; a rejection is
    /// recorded in `last_error` rather than returned as `Err`, so the form
    /// surfaces it inline. `Err` is only the double-submit rejection. A
    /// completion that lost a race with `logout` is dropped and the
    /// (cleared) snapshot returned.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, SessionError> {
        let attempt = self.store.begin_auth()?;

        let completion = match self.api.login(&request).await {
            Ok(outcome) => match outcome.into_result() {
                Ok(identity) => self.store.auth_succeeded(attempt, identity),
                Err(error) => self.store.auth_failed(attempt, error),
            },
            Err(err) => self
                .store
                .auth_failed(attempt, AuthError::network(err.to_string())),
        };

        if completion == Err(SessionError::StaleAttempt) {
            tracing::debug!("login completion arrived after cancellation; dropped");
        }

        Ok(self.store.snapshot())
    }

    /// Register a new citizen.
    ///
    /// Does not touch the session; the loading signal covers the
    /// round-trip. Returns the registration number the citizen must keep.
    pub async fn signup(&self, request: SignupRequest) -> Result<String, ClientError> {
        request.validate()?;

        let _busy = self.loading.guard();
        self.api.signup(&request).await?.into_result()
    }

    /// Logout. Idempotent; cancels any in-flight login.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Clear the inline form error without resetting the session.
    pub fn clear_error(&self) {
        self.store.clear_error();
    }

    /// Evaluate a navigation against the gate.
    pub fn navigate(&self, path: impl Into<RoutePath>) -> Result<Navigation, ViewLoadError> {
        self.gate.evaluate(&path.into())
    }

    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    pub fn header(&self) -> HeaderSnapshot {
        HeaderSnapshot::from_session(&self.store.snapshot(), &self.resolver)
    }

    pub fn loading(&self) -> &LoadingSignal {
        &self.loading
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Store handle for collaborators that need direct snapshots.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}
