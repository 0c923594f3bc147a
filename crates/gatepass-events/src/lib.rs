//! Event record and publishers for scan outcomes.
//!
//! Every processed scan produces exactly one [`AccessEvent`], serialized as
//! JSON with the wire field names consumed by downstream subscribers. The
//! [`EventSink`] trait is the seam between the scan loop and transport:
//! [`MqttSink`] publishes to the team topic, [`LogSink`] mirrors the record
//! into the structured log, and [`FanoutSink`] composes sinks so both see
//! every event.
//!
//! Publication is fire-and-forget from the state machine's perspective:
//! sink errors are reported to the caller for logging but never influence
//! access decisions.

pub mod error;
pub mod mqtt;
pub mod record;
pub mod sink;

pub use error::{EventError, Result};
pub use mqtt::{MqttConfig, MqttSink};
pub use record::{AccessEvent, EventBody};
pub use sink::{EventSink, FanoutSink, LogSink, MemorySink};
