//! Event sink seam and basic implementations.

#![allow(async_fn_in_trait)]

use crate::{Result, record::AccessEvent};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Destination for published events.
///
/// Implementations are transports; they must not interpret the record.
/// Callers treat publication as fire-and-forget: a sink error is logged by
/// the scan loop and never affects access decisions.
pub trait EventSink: Send + Sync {
    /// Publish one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the
    /// transport rejects it.
    async fn publish(&mut self, event: &AccessEvent) -> Result<()>;
}

/// Sink that mirrors every record into the structured log at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a new log sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogSink {
    async fn publish(&mut self, event: &AccessEvent) -> Result<()> {
        let payload = event.to_json()?;
        info!(target: "gatepass::events", team = %event.team, %payload, "event published");
        Ok(())
    }
}

/// Sink that publishes to two sinks in sequence.
///
/// Both sinks see every event even if the first fails; the first error is
/// reported after both attempts.
#[derive(Debug, Clone)]
pub struct FanoutSink<A, B> {
    first: A,
    second: B,
}

impl<A, B> FanoutSink<A, B> {
    /// Compose two sinks.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventSink, B: EventSink> EventSink for FanoutSink<A, B> {
    async fn publish(&mut self, event: &AccessEvent) -> Result<()> {
        let first = self.first.publish(event).await;
        let second = self.second.publish(event).await;
        first.and(second)
    }
}

/// In-memory sink for tests: records every published event.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to the scan loop.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<AccessEvent>>>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far, in order.
    pub fn events(&self) -> Vec<AccessEvent> {
        self.events.lock().expect("memory sink poisoned").clone()
    }

    /// Number of events published so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("memory sink poisoned").len()
    }

    /// Returns `true` if nothing was published yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    async fn publish(&mut self, event: &AccessEvent) -> Result<()> {
        self.events
            .lock()
            .expect("memory sink poisoned")
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_core::EventTimestamp;

    fn sample(action: &str) -> AccessEvent {
        let ts = EventTimestamp::parse("10/05/2025", "12:00:00").unwrap();
        AccessEvent::new("TEAM", "Alice", "AA", action, &ts)
    }

    #[tokio::test]
    async fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();

        sink.publish(&sample("entrada")).await.unwrap();
        sink.publish(&sample("salida")).await.unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].body.action, "entrada");
        assert_eq!(events[1].body.action, "salida");
    }

    #[tokio::test]
    async fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.publish(&sample("entrada")).await.unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_fanout_reaches_both_sinks() {
        let a = MemorySink::new();
        let b = MemorySink::new();
        let mut fanout = FanoutSink::new(a.clone(), b.clone());

        fanout.publish(&sample("entrada")).await.unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[tokio::test]
    async fn test_log_sink_is_infallible_for_valid_records() {
        let mut sink = LogSink::new();
        assert!(sink.publish(&sample("salida")).await.is_ok());
    }
}
