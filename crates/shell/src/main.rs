use sevagate_client::{AuthApi, HttpAuthApi, LoginOutcome, LoginRequest, MockAuthApi};
use sevagate_core::{Identity, Profile};
use sevagate_gate::Navigation;
use sevagate_shell::{PortalShell, routes};

#[tokio::main]
async fn main() {
    sevagate_observability::init();

    match std::env::var("SEVAGATE_API_BASE") {
        Ok(base) => {
            tracing::info!(%base, "using portal backend");
            let user = std::env::var("SEVAGATE_ADMIN_USER").unwrap_or_else(|_| {
                tracing::warn!("SEVAGATE_ADMIN_USER not set; using dev default");
                "secretary".to_string()
            });
            let pass = std::env::var("SEVAGATE_ADMIN_PASS").unwrap_or_else(|_| {
                tracing::warn!("SEVAGATE_ADMIN_PASS not set; using dev default");
                "secretary".to_string()
            });
            let shell = PortalShell::new(HttpAuthApi::new(base))
                .expect("default route table is valid");
            walkthrough(&shell, LoginRequest::admin(user, pass, "127.0.0.1")).await;
        }
        Err(_) => {
            tracing::warn!("SEVAGATE_API_BASE not set; running against the scripted mock backend");
            let api = MockAuthApi::new();
            api.push_login(Ok(LoginOutcome::succeeded(Identity::Profile(Profile {
                name: "A. Kumar".to_string(),
                role: Some(routes::SECRETARY.to_string()),
                registration_no: None,
            }))));
            let shell = PortalShell::new(api).expect("default route table is valid");
            walkthrough(&shell, LoginRequest::admin("secretary", "secret", "127.0.0.1")).await;
        }
    }
}

/// Scripted pass over the portal flows: blocked navigation, login,
/// dashboard, a denied path, logout.
async fn walkthrough<A: AuthApi>(shell: &PortalShell<A>, request: LoginRequest) {
    let decision = shell
        .navigate(routes::ADMIN_REPORT_PATH)
        .expect("static views cannot fail to load");
    tracing::info!(?decision, "navigation before login");

    let session = shell.login(request).await.expect("no concurrent login");
    tracing::info!(status = ?session.status, "login finished");
    if let Some(error) = &session.last_error {
        tracing::error!(%error, "login failed; stopping walkthrough");
        return;
    }

    let header = shell.header();
    tracing::info!(
        name = header.display_name.as_deref().unwrap_or("-"),
        role = %header.role_badge(),
        "header after login"
    );

    match shell.navigate(routes::ADMIN_REPORT_PATH) {
        Ok(Navigation::Render(view)) => println!("{}", view.mount()),
        Ok(Navigation::RedirectTo(path)) => tracing::info!(%path, "redirected"),
        Err(err) => tracing::error!(%err, "view failed to load"),
    }

    // A citizen-only path: denied, redirected to the secretary landing.
    let decision = shell
        .navigate(routes::DASHBOARD_PATH)
        .expect("static views cannot fail to load");
    tracing::info!(?decision, "navigation to a citizen-only path");

    shell.logout();
    let decision = shell
        .navigate(routes::ADMIN_REPORT_PATH)
        .expect("static views cannot fail to load");
    tracing::info!(?decision, "navigation after logout");
}
