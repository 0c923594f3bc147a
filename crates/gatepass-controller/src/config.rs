//! Runtime configuration.
//!
//! Everything the binary needs is fixed at startup from one TOML document:
//! team identifier (also the MQTT topic), broker address, timing knobs, and
//! the tag registry. Nothing here mutates at runtime.
//!
//! ```toml
//! team = "JFMD-KAVG"
//!
//! [broker]
//! host = "test.mosquitto.org"
//! port = 1883
//!
//! [[registry]]
//! uid = "35 F2 B3 02"
//! name = "Alice Example"
//! color = [0, 255, 0]
//! ```

use crate::backoff::Backoff;
use gatepass_access::{IdentityRegistry, RegistryEntry};
use gatepass_core::{
    Error, Result,
    constants::{
        DEFAULT_BACKOFF_INITIAL_MS, DEFAULT_BACKOFF_MAX_MS, DEFAULT_BROKER_PORT,
        DEFAULT_DENY_DWELL_MS, DEFAULT_GRANT_DWELL_MS,
    },
};
use gatepass_events::MqttConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Team identifier; published in every record and used as the topic.
    pub team: String,

    /// Broker address.
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Indicator and reconnect timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Registered tags.
    #[serde(default)]
    pub registry: Vec<RegistryEntry>,
}

/// MQTT broker address.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    /// Broker hostname or IP.
    #[serde(default = "default_broker_host")]
    pub host: String,

    /// Broker port.
    #[serde(default = "default_broker_port")]
    pub port: u16,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: default_broker_host(),
            port: default_broker_port(),
        }
    }
}

/// Timing knobs for the scan loop and the connection supervisor.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Indicator dwell after a granted scan (milliseconds).
    #[serde(default = "default_grant_dwell_ms")]
    pub grant_dwell_ms: u64,

    /// Indicator dwell after a rejected or no-pass scan (milliseconds).
    #[serde(default = "default_deny_dwell_ms")]
    pub deny_dwell_ms: u64,

    /// Initial reconnect delay (milliseconds).
    #[serde(default = "default_backoff_initial_ms")]
    pub backoff_initial_ms: u64,

    /// Maximum reconnect delay (milliseconds).
    #[serde(default = "default_backoff_max_ms")]
    pub backoff_max_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            grant_dwell_ms: default_grant_dwell_ms(),
            deny_dwell_ms: default_deny_dwell_ms(),
            backoff_initial_ms: default_backoff_initial_ms(),
            backoff_max_ms: default_backoff_max_ms(),
        }
    }
}

fn default_broker_host() -> String {
    "test.mosquitto.org".to_string()
}

fn default_broker_port() -> u16 {
    DEFAULT_BROKER_PORT
}

fn default_grant_dwell_ms() -> u64 {
    DEFAULT_GRANT_DWELL_MS
}

fn default_deny_dwell_ms() -> u64 {
    DEFAULT_DENY_DWELL_MS
}

fn default_backoff_initial_ms() -> u64 {
    DEFAULT_BACKOFF_INITIAL_MS
}

fn default_backoff_max_ms() -> u64 {
    DEFAULT_BACKOFF_MAX_MS
}

impl GateConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    /// Returns `Error::Config` if the document is not valid TOML or is
    /// missing required keys.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, or `Error::Config`
    /// if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Build the identity registry from the configured entries.
    ///
    /// # Errors
    /// Returns an error on duplicate or malformed UIDs.
    pub fn identity_registry(&self) -> Result<IdentityRegistry> {
        IdentityRegistry::from_entries(self.registry.clone())
    }

    /// MQTT sink configuration for the team topic.
    pub fn mqtt_config(&self) -> MqttConfig {
        MqttConfig::for_team(self.broker.host.clone(), self.team.clone())
            .with_port(self.broker.port)
    }

    /// Reconnect backoff schedule.
    pub fn backoff(&self) -> Backoff {
        Backoff::new(
            Duration::from_millis(self.timing.backoff_initial_ms),
            Duration::from_millis(self.timing.backoff_max_ms),
        )
    }

    /// Dwell after a granted scan.
    pub fn grant_dwell(&self) -> Duration {
        Duration::from_millis(self.timing.grant_dwell_ms)
    }

    /// Dwell after a rejected or no-pass scan.
    pub fn deny_dwell(&self) -> Duration {
        Duration::from_millis(self.timing.deny_dwell_ms)
    }
}
