//! Runtime glue: configuration, the scan loop, and connection supervision.
//!
//! This crate wires the decision core to its collaborators. The
//! [`GateLoop`] is a single cooperative task that fully processes one scan
//! (resolve, decide, indicate, publish, dwell, clear) before accepting the
//! next; the connection supervisor drives the MQTT event loop on its own
//! task, retrying with exponential [`Backoff`] so the scan loop never
//! blocks on I/O.

pub mod backoff;
pub mod config;
pub mod gate;
pub mod supervisor;

pub use backoff::Backoff;
pub use config::{BrokerConfig, GateConfig, TimingConfig};
pub use gate::GateLoop;
pub use supervisor::spawn_supervisor;
