//! Black-box flows through the shell: login, navigation, cancellation.

use std::sync::Arc;
use std::time::Duration;

use sevagate_client::{ClientError, LoginOutcome, LoginRequest, MockAuthApi, SignupOutcome,
    SignupRequest};
use sevagate_core::{AuthErrorKind, Identity, Profile, SessionStatus};
use sevagate_gate::{GateState, Navigation};
use sevagate_session::SessionError;
use sevagate_shell::{PortalShell, routes};

fn secretary_identity() -> Identity {
    Identity::Profile(Profile {
        name: "A. Kumar".to_string(),
        role: Some(routes::SECRETARY.to_string()),
        registration_no: None,
    })
}

fn shell_with(api: MockAuthApi) -> Arc<PortalShell<MockAuthApi>> {
    Arc::new(PortalShell::new(api).expect("default route table is valid"))
}

fn admin_request() -> LoginRequest {
    LoginRequest::admin("secretary", "secret", "127.0.0.1")
}

#[tokio::test]
async fn no_session_any_protected_path_redirects_to_login() {
    let shell = shell_with(MockAuthApi::new());

    for path in [
        routes::DASHBOARD_PATH,
        routes::ADMIN_DASHBOARD_PATH,
        routes::ADMIN_REPORT_PATH,
        "/made-up",
    ] {
        match shell.navigate(path).unwrap() {
            Navigation::RedirectTo(target) => assert_eq!(target.as_str(), routes::LOGIN_PATH),
            other => panic!("expected redirect for {path}, got {other:?}"),
        }
    }
    assert_eq!(shell.gate().state(), GateState::Unauthenticated);
}

#[tokio::test]
async fn secretary_on_citizen_path_is_sent_to_their_own_landing() {
    let api = MockAuthApi::new();
    api.push_login(Ok(LoginOutcome::succeeded(secretary_identity())));
    let shell = shell_with(api);

    let session = shell.login(admin_request()).await.unwrap();
    assert!(session.is_authenticated());

    // Citizen-only route with a secretary session.
    match shell.navigate(routes::DASHBOARD_PATH).unwrap() {
        Navigation::RedirectTo(target) => {
            assert_eq!(target.as_str(), routes::ADMIN_DASHBOARD_PATH);
        }
        other => panic!("expected redirect, got {other:?}"),
    }
    assert_eq!(shell.gate().state(), GateState::Denied);
}

#[tokio::test]
async fn permitted_navigation_renders_and_reuses_the_loaded_view() {
    let api = MockAuthApi::new();
    api.push_login(Ok(LoginOutcome::succeeded(secretary_identity())));
    let shell = shell_with(api);
    shell.login(admin_request()).await.unwrap();

    let first = match shell.navigate(routes::ADMIN_REPORT_PATH).unwrap() {
        Navigation::Render(view) => view,
        other => panic!("expected render, got {other:?}"),
    };
    let second = match shell.navigate(routes::ADMIN_REPORT_PATH).unwrap() {
        Navigation::Render(view) => view,
        other => panic!("expected render, got {other:?}"),
    };

    // Load-once memoization: both navigations mount the same instance.
    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.mount().contains("WASTANIA"));
}

#[tokio::test]
async fn rejected_login_surfaces_inline_and_is_clearable() {
    let api = MockAuthApi::new();
    api.push_login(Ok(LoginOutcome::rejected("bad credentials")));
    let shell = shell_with(api);

    let session = shell.login(admin_request()).await.unwrap();
    assert_eq!(session.status, SessionStatus::Failed);
    assert_eq!(
        session.last_error.as_ref().map(|e| e.kind),
        Some(AuthErrorKind::AuthRejected)
    );
    assert!(!shell.loading().is_visible());

    // Correcting the form clears the error without a full reset.
    shell.clear_error();
    assert!(shell.session().last_error.is_none());
    assert_eq!(shell.session().status, SessionStatus::Failed);
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let api = MockAuthApi::new();
    api.push_login(Err(ClientError::Network("connection refused".to_string())));
    let shell = shell_with(api);

    let session = shell.login(admin_request()).await.unwrap();
    assert_eq!(
        session.last_error.as_ref().map(|e| e.kind),
        Some(AuthErrorKind::NetworkFailure)
    );
}

#[tokio::test(start_paused = true)]
async fn logout_during_login_discards_the_stale_success() {
    let api = MockAuthApi::new().with_latency(Duration::from_millis(50));
    api.push_login(Ok(LoginOutcome::succeeded(secretary_identity())));
    let shell = shell_with(api);

    let in_flight = {
        let shell = Arc::clone(&shell);
        tokio::spawn(async move { shell.login(admin_request()).await })
    };

    // Let the round-trip start, then log out mid-request.
    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_eq!(shell.session().status, SessionStatus::Pending);
    shell.logout();

    let session = in_flight.await.unwrap().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.status, SessionStatus::Idle);
    assert!(!shell.loading().is_visible());

    // The discarded completion must not have resurrected anything.
    match shell.navigate(routes::ADMIN_DASHBOARD_PATH).unwrap() {
        Navigation::RedirectTo(target) => assert_eq!(target.as_str(), routes::LOGIN_PATH),
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn second_login_while_pending_is_rejected() {
    let api = MockAuthApi::new().with_latency(Duration::from_millis(50));
    api.push_login(Ok(LoginOutcome::succeeded(secretary_identity())));
    let shell = shell_with(api);

    let in_flight = {
        let shell = Arc::clone(&shell);
        tokio::spawn(async move { shell.login(admin_request()).await })
    };

    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_eq!(
        shell.login(admin_request()).await,
        Err(SessionError::AlreadyPending)
    );

    // The original attempt still completes normally.
    let session = in_flight.await.unwrap().unwrap();
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn signup_validates_before_any_round_trip() {
    let api = MockAuthApi::new();
    api.push_signup(Ok(SignupOutcome::registered("REG-2023-104")));
    let shell = shell_with(api);

    let invalid = SignupRequest {
        mobile_no: "12345".to_string(),
        adhar_no: "123412341234".to_string(),
        name: "A. Kumar".to_string(),
        district_id: "D-17".to_string(),
    };
    assert!(matches!(
        shell.signup(invalid).await,
        Err(ClientError::Invalid(_))
    ));

    let valid = SignupRequest {
        mobile_no: "9876543210".to_string(),
        adhar_no: "123412341234".to_string(),
        name: "A. Kumar".to_string(),
        district_id: "D-17".to_string(),
    };
    let registration_no = shell.signup(valid).await.unwrap();
    assert_eq!(registration_no, "REG-2023-104");
    assert!(!shell.loading().is_visible());
}

#[tokio::test]
async fn header_reflects_the_session_lifecycle() {
    let api = MockAuthApi::new();
    api.push_login(Ok(LoginOutcome::succeeded(secretary_identity())));
    let shell = shell_with(api);

    assert_eq!(shell.header().role_badge(), "—");

    shell.login(admin_request()).await.unwrap();
    let header = shell.header();
    assert_eq!(header.display_name.as_deref(), Some("A. Kumar"));
    assert_eq!(header.role_badge(), routes::SECRETARY);

    shell.logout();
    assert_eq!(shell.header().role_badge(), "—");
    assert!(!shell.header().authenticated);
}
