//! The access gate state machine.
//!
//! Every navigation evaluation starts from a fresh session snapshot, so a
//! stale authorized view cannot outlive a store that lost its role. The
//! hosting shell performs the actual render/redirect; the gate only
//! decides.

use std::sync::{Arc, Mutex};

use sevagate_session::{RoleResolver, SessionStore};
use sevagate_views::{RouteAccess, RoutePath, View, ViewId, ViewLoadError, ViewRegistry};

/// Observable state of the gate after its most recent evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    /// No resolvable role; the caller was sent to the login entry.
    #[default]
    Unauthenticated,
    /// A permitted view is being materialized.
    Resolving,
    /// The view was mounted.
    Authorized(ViewId),
    /// The path was refused for the caller's role.
    Denied,
}

/// Routing decision emitted per navigation evaluation.
pub enum Navigation {
    Render(Arc<dyn View>),
    RedirectTo(RoutePath),
}

impl core::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Navigation::Render(view) => f.debug_tuple("Render").field(&view.id()).finish(),
            Navigation::RedirectTo(path) => f.debug_tuple("RedirectTo").field(path).finish(),
        }
    }
}

/// Decides, for every navigation into the protected region, whether the
/// caller may proceed and which view to mount.
#[derive(Debug)]
pub struct AccessGate {
    store: Arc<SessionStore>,
    resolver: RoleResolver,
    registry: Arc<ViewRegistry>,
    login_path: RoutePath,
    state: Mutex<GateState>,
}

impl AccessGate {
    pub fn new(
        store: Arc<SessionStore>,
        resolver: RoleResolver,
        registry: Arc<ViewRegistry>,
        login_path: RoutePath,
    ) -> Self {
        Self {
            store,
            resolver,
            registry,
            login_path,
            state: Mutex::new(GateState::Unauthenticated),
        }
    }

    /// State reached by the most recent evaluation.
    pub fn state(&self) -> GateState {
        self.lock_state().clone()
    }

    /// Evaluate one navigation request.
    ///
    /// Denials and missing roles are routing decisions (`RedirectTo`), not
    /// errors; the only error is a permitted view failing to materialize.
    pub fn evaluate(&self, path: &RoutePath) -> Result<Navigation, ViewLoadError> {
        let session = self.store.snapshot();

        let Some(role) = self.resolver.resolve(&session) else {
            // Reconcile a dangling authenticated-looking UI with a store
            // that has lost its role, then send the caller to login. The
            // originally requested destination is discarded.
            self.store.clear();
            self.set_state(GateState::Unauthenticated);
            tracing::info!(path = %path, "no resolvable role; redirecting to login");
            return Ok(Navigation::RedirectTo(self.login_path.clone()));
        };

        match self.registry.lookup(path, &role) {
            RouteAccess::Permitted(descriptor) => {
                self.set_state(GateState::Resolving);
                let view = match descriptor.materialize() {
                    Ok(view) => view,
                    Err(err) => {
                        tracing::error!(path = %path, error = %err, "view failed to materialize");
                        return Err(err);
                    }
                };
                self.set_state(GateState::Authorized(descriptor.id().clone()));
                tracing::debug!(path = %path, role = %role, view = %descriptor.id(), "navigation authorized");
                Ok(Navigation::Render(view))
            }
            RouteAccess::Forbidden | RouteAccess::NotFound => {
                // Redirect without detail: a denial must not leak which
                // roles a path requires.
                match self.registry.landing_path_for(&role) {
                    Some(landing) => {
                        self.set_state(GateState::Denied);
                        tracing::debug!(path = %path, role = %role, landing = %landing, "navigation denied");
                        Ok(Navigation::RedirectTo(landing.clone()))
                    }
                    None => {
                        self.set_state(GateState::Unauthenticated);
                        tracing::debug!(path = %path, role = %role, "navigation denied with no landing");
                        Ok(Navigation::RedirectTo(self.login_path.clone()))
                    }
                }
            }
        }
    }

    fn set_state(&self, next: GateState) {
        *self.lock_state() = next;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, GateState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevagate_core::{Identity, Profile, Role, SessionStatus};
    use sevagate_session::LoadingSignal;
    use sevagate_views::ViewDescriptor;

    const SECRETARY: &str = "Secretary-Login";
    const CITIZEN: &str = "user-login";

    struct StubView(&'static str);

    impl View for StubView {
        fn id(&self) -> ViewId {
            ViewId::new(self.0)
        }

        fn title(&self) -> &str {
            self.0
        }

        fn mount(&self) -> String {
            self.0.to_string()
        }
    }

    fn descriptor(id: &'static str) -> ViewDescriptor {
        ViewDescriptor::new(id, move || Ok(Arc::new(StubView(id)) as Arc<dyn View>))
    }

    fn registry() -> Arc<ViewRegistry> {
        Arc::new(
            ViewRegistry::builder()
                .route("/dashboard", [Role::new(CITIZEN)], descriptor("citizen-dashboard"))
                .route(
                    "/admin/dashboard",
                    [Role::new(SECRETARY)],
                    descriptor("secretary-dashboard"),
                )
                .route(
                    "/admin/report",
                    [Role::new(SECRETARY)],
                    descriptor("district-report"),
                )
                .route(
                    "/broken",
                    [Role::new(CITIZEN)],
                    ViewDescriptor::new("broken", || {
                        Err(ViewLoadError::new(ViewId::new("broken"), "chunk missing"))
                    }),
                )
                .landing(Role::new(SECRETARY), "/admin/dashboard")
                .landing(Role::new(CITIZEN), "/dashboard")
                .build()
                .unwrap(),
        )
    }

    fn gate_with_store() -> (Arc<SessionStore>, AccessGate) {
        let store = Arc::new(SessionStore::new(Arc::new(LoadingSignal::new())));
        let resolver = RoleResolver::new([Role::new(SECRETARY), Role::new(CITIZEN)]);
        let gate = AccessGate::new(
            Arc::clone(&store),
            resolver,
            registry(),
            RoutePath::new("/login"),
        );
        (store, gate)
    }

    fn login_as(store: &SessionStore, identity: Identity) {
        let attempt = store.begin_auth().unwrap();
        store.auth_succeeded(attempt, identity).unwrap();
    }

    #[test]
    fn no_session_redirects_to_login() {
        let (_store, gate) = gate_with_store();

        let nav = gate.evaluate(&RoutePath::new("/dashboard")).unwrap();
        match nav {
            Navigation::RedirectTo(path) => assert_eq!(path.as_str(), "/login"),
            other => panic!("expected redirect, got {other:?}"),
        }
        assert_eq!(gate.state(), GateState::Unauthenticated);
    }

    #[test]
    fn roleless_authenticated_session_is_cleared_before_redirect() {
        let (store, gate) = gate_with_store();

        // Authenticated, but the profile carries no role field.
        login_as(
            &store,
            Identity::Profile(Profile {
                name: "A. Kumar".to_string(),
                role: None,
                registration_no: None,
            }),
        );
        assert!(store.snapshot().is_authenticated());

        let nav = gate.evaluate(&RoutePath::new("/dashboard")).unwrap();
        assert!(matches!(nav, Navigation::RedirectTo(ref p) if p.as_str() == "/login"));

        // Forced logout reconciled the dangling session.
        assert_eq!(store.snapshot().status, SessionStatus::Idle);
        assert!(store.snapshot().identity.is_none());
    }

    #[test]
    fn unrecognized_role_never_authorizes() {
        let (store, gate) = gate_with_store();
        login_as(&store, Identity::Bare("super-admin".to_string()));

        let nav = gate.evaluate(&RoutePath::new("/dashboard")).unwrap();
        assert!(matches!(nav, Navigation::RedirectTo(ref p) if p.as_str() == "/login"));
        assert_eq!(gate.state(), GateState::Unauthenticated);
    }

    #[test]
    fn permitted_navigation_mounts_the_view() {
        let (store, gate) = gate_with_store();
        login_as(&store, Identity::Bare(CITIZEN.to_string()));

        let nav = gate.evaluate(&RoutePath::new("/dashboard")).unwrap();
        match nav {
            Navigation::Render(view) => assert_eq!(view.id().as_str(), "citizen-dashboard"),
            other => panic!("expected render, got {other:?}"),
        }
        assert_eq!(
            gate.state(),
            GateState::Authorized(ViewId::new("citizen-dashboard"))
        );
    }

    #[test]
    fn denied_path_redirects_to_the_roles_landing() {
        let (store, gate) = gate_with_store();
        login_as(
            &store,
            Identity::Profile(Profile {
                name: "A".to_string(),
                role: Some(SECRETARY.to_string()),
                registration_no: None,
            }),
        );

        // Citizen-only path evaluated with a secretary session.
        let nav = gate.evaluate(&RoutePath::new("/dashboard")).unwrap();
        match nav {
            Navigation::RedirectTo(path) => assert_eq!(path.as_str(), "/admin/dashboard"),
            other => panic!("expected redirect, got {other:?}"),
        }
        assert_eq!(gate.state(), GateState::Denied);
    }

    #[test]
    fn unknown_path_is_denied_not_a_crash() {
        let (store, gate) = gate_with_store();
        login_as(&store, Identity::Bare(CITIZEN.to_string()));

        let nav = gate.evaluate(&RoutePath::new("/does-not-exist")).unwrap();
        assert!(matches!(nav, Navigation::RedirectTo(ref p) if p.as_str() == "/dashboard"));
        assert_eq!(gate.state(), GateState::Denied);
    }

    #[test]
    fn view_load_failure_is_not_conflated_with_denial() {
        let (store, gate) = gate_with_store();
        login_as(&store, Identity::Bare(CITIZEN.to_string()));

        let err = gate.evaluate(&RoutePath::new("/broken")).unwrap_err();
        assert_eq!(err.view, ViewId::new("broken"));

        // The session survives a load failure; only the navigation failed.
        assert!(store.snapshot().is_authenticated());
    }
}
