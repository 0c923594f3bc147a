//! MQTT event sink.
//!
//! Publishes each record to the team topic with QoS 1. The sink holds only
//! the client half of the rumqttc pair; the event loop half must be driven
//! by a supervisor task (see `gatepass-controller`), which owns reconnects
//! and backoff. Until the connection is up, published messages queue inside
//! the client.

use crate::{Result, record::AccessEvent, sink::EventSink};
use gatepass_core::constants::{DEFAULT_BROKER_PORT, DEFAULT_MQTT_KEEP_ALIVE_SECS};
use rumqttc::{AsyncClient, EventLoop, MqttOptions, QoS};
use std::time::Duration;
use tracing::debug;

/// Capacity of the client-side request queue.
///
/// The scan loop publishes at human cadence (one event per tag
/// presentation), so a small queue absorbs any broker hiccup the
/// supervisor is still recovering from.
const REQUEST_QUEUE_CAPACITY: usize = 16;

/// Configuration for the MQTT sink.
#[derive(Debug, Clone)]
pub struct MqttConfig {
    /// Broker hostname or IP.
    pub broker_host: String,

    /// Broker port.
    pub broker_port: u16,

    /// Topic to publish to (the team identifier).
    pub topic: String,

    /// Client identifier presented to the broker.
    pub client_id: String,

    /// Keep-alive interval.
    pub keep_alive: Duration,
}

impl MqttConfig {
    /// Configuration for a team topic against a broker host, with default
    /// port and keep-alive. The client id is derived from the team name.
    pub fn for_team(broker_host: impl Into<String>, team: impl Into<String>) -> Self {
        let topic = team.into();
        Self {
            broker_host: broker_host.into(),
            broker_port: DEFAULT_BROKER_PORT,
            topic: topic.clone(),
            client_id: format!("gatepass-{topic}"),
            keep_alive: Duration::from_secs(DEFAULT_MQTT_KEEP_ALIVE_SECS),
        }
    }

    /// Override the broker port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.broker_port = port;
        self
    }
}

/// Event sink publishing to an MQTT topic.
pub struct MqttSink {
    client: AsyncClient,
    topic: String,
}

impl MqttSink {
    /// Create the sink and its connection event loop.
    ///
    /// The returned [`EventLoop`] must be polled continuously for the
    /// connection to make progress; hand it to the connection supervisor.
    pub fn connect(config: &MqttConfig) -> (Self, EventLoop) {
        debug!(
            host = %config.broker_host,
            port = config.broker_port,
            topic = %config.topic,
            "creating MQTT client"
        );

        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(config.keep_alive);

        let (client, event_loop) = AsyncClient::new(options, REQUEST_QUEUE_CAPACITY);

        (
            Self {
                client,
                topic: config.topic.clone(),
            },
            event_loop,
        )
    }

    /// The topic this sink publishes to.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl EventSink for MqttSink {
    async fn publish(&mut self, event: &AccessEvent) -> Result<()> {
        let payload = event.to_json()?;
        self.client
            .publish(self.topic.clone(), QoS::AtLeastOnce, false, payload)
            .await?;
        Ok(())
    }
}
