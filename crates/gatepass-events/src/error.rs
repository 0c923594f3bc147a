//! Error types for event publication.

use thiserror::Error;

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors that can occur while formatting or publishing an event.
#[derive(Debug, Error)]
pub enum EventError {
    /// The event record could not be serialized.
    #[error("Failed to serialize event record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport refused or dropped the publication.
    #[error("Failed to publish event: {0}")]
    Publish(#[from] rumqttc::ClientError),

    /// The sink's channel to its transport task is gone.
    #[error("Event channel closed")]
    ChannelClosed,
}
