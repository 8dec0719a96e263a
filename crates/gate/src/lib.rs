//! `sevagate-gate` — per-navigation authorization decisions.
//!
//! The gate is the only component that turns session state into a routing
//! decision. It is deliberately fail-closed: no resolvable role or no
//! matching route never yields an authorized outcome.

pub mod gate;

pub use gate::{AccessGate, GateState, Navigation};
