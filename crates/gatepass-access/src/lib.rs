//! Access-control core: identity registry and per-card entry/exit state.
//!
//! This crate contains the decision logic of the system. A scanned UID is
//! resolved against a fixed registry, the per-card state machine picks the
//! outcome (entry, exit, rejection, or no-pass), and the caller renders the
//! outcome on the indicator and the event channel. There is no I/O here;
//! every decision is synchronous and deterministic.

pub mod controller;
pub mod registry;
pub mod state;

pub use controller::{AccessController, Outcome, ScanOutcome};
pub use registry::{IdentityRegistry, RegistryEntry, Resolution, TagIdentity};
pub use state::CardState;
