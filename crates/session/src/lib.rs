//! `sevagate-session` — mutable shared state for the portal front-end.
//!
//! The session store and the loading signal are the only mutable shared
//! state in the core; both are mutated exclusively through their named
//! operations, and every external reader works on owned snapshots.

pub mod loading;
pub mod resolve;
pub mod store;

pub use loading::{LoadingGuard, LoadingSignal};
pub use resolve::RoleResolver;
pub use store::{AuthAttempt, SessionError, SessionStore};
