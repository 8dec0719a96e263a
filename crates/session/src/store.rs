//! Session store: named transitions over the authentication state machine.
//!
//! All mutation goes through the operations below; readers take owned
//! snapshots. Each `begin_auth` hands out a generation-tagged attempt token
//! and a terminal transition is accepted only while that token is current,
//! so a completion that lost a race with `clear()` cannot resurrect the
//! session.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use sevagate_core::{AuthError, Identity, Session, SessionStatus};

use crate::loading::LoadingSignal;

/// Precondition failures of the named transitions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A second `begin_auth` while one is outstanding. Rejected, not queued.
    #[error("an authentication attempt is already in flight")]
    AlreadyPending,

    /// The attempt token was superseded (logout or a newer attempt); the
    /// completion is discarded.
    #[error("stale authentication attempt discarded")]
    StaleAttempt,
}

/// Generation-tagged token for one authentication round-trip.
///
/// Single use: every transition out of `Pending` advances the generation,
/// so a token can complete at most one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthAttempt(u64);

#[derive(Debug)]
struct StoreState {
    session: Session,
    generation: u64,
}

/// Shared, injectable session store.
///
/// One instance per logical user session; consumers (header, gate, shell)
/// receive it explicitly instead of through a process-global.
#[derive(Debug)]
pub struct SessionStore {
    state: Mutex<StoreState>,
    loading: Arc<LoadingSignal>,
}

impl SessionStore {
    pub fn new(loading: Arc<LoadingSignal>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                session: Session::idle(),
                generation: 0,
            }),
            loading,
        }
    }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    /// Start an authentication round-trip.
    ///
    /// Fails fast while another attempt is pending; otherwise clears the
    /// last error, raises the loading signal and returns the token both
    /// terminal transitions require.
    pub fn begin_auth(&self) -> Result<AuthAttempt, SessionError> {
        let mut state = self.lock();
        if state.session.status == SessionStatus::Pending {
            return Err(SessionError::AlreadyPending);
        }
        state.generation += 1;
        state.session.status = SessionStatus::Pending;
        state.session.last_error = None;
        let attempt = AuthAttempt(state.generation);
        drop(state);

        self.loading.show();
        tracing::debug!(generation = attempt.0, "authentication attempt started");
        Ok(attempt)
    }

    /// Complete the attempt with an authenticated identity.
    pub fn auth_succeeded(
        &self,
        attempt: AuthAttempt,
        identity: Identity,
    ) -> Result<(), SessionError> {
        let mut state = self.lock();
        if attempt.0 != state.generation {
            tracing::debug!(
                generation = attempt.0,
                current = state.generation,
                "discarding stale login success"
            );
            return Err(SessionError::StaleAttempt);
        }
        debug_assert_eq!(state.session.status, SessionStatus::Pending);
        state.generation += 1;
        state.session.status = SessionStatus::Authenticated;
        state.session.identity = Some(identity);
        state.session.last_error = None;
        state.session.logged_in_at = Some(Utc::now());
        drop(state);

        self.loading.hide();
        tracing::info!("authentication succeeded");
        Ok(())
    }

    /// Complete the attempt with a failure.
    pub fn auth_failed(&self, attempt: AuthAttempt, error: AuthError) -> Result<(), SessionError> {
        let kind = error.kind;

        let mut state = self.lock();
        if attempt.0 != state.generation {
            tracing::debug!(
                generation = attempt.0,
                current = state.generation,
                "discarding stale login failure"
            );
            return Err(SessionError::StaleAttempt);
        }
        debug_assert_eq!(state.session.status, SessionStatus::Pending);
        state.generation += 1;
        state.session.status = SessionStatus::Failed;
        state.session.identity = None;
        state.session.last_error = Some(error);
        drop(state);

        self.loading.hide();
        tracing::warn!(%kind, "authentication failed");
        Ok(())
    }

    /// Logout: reset to idle. Idempotent. Also cancels an in-flight
    /// attempt, whose eventual completion is then discarded as stale.
    pub fn clear(&self) {
        let mut state = self.lock();
        let was_pending = state.session.status == SessionStatus::Pending;
        state.session = Session::idle();
        state.generation += 1;
        drop(state);

        if was_pending {
            // Balance the show() of the cancelled attempt.
            self.loading.hide();
        }
        tracing::debug!(cancelled_pending = was_pending, "session cleared");
    }

    /// Drop the stored error without touching status or identity.
    /// Idempotent.
    pub fn clear_error(&self) {
        self.lock().session.last_error = None;
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Transitions assign whole fields under the lock, so a poisoned
        // lock cannot hold a torn session; recover the guard.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
