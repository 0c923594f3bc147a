//! Core constants shared across the gatepass workspace.
//!
//! This module centralizes the fixed values of the deployed system: wire
//! labels for the event record, timestamp formats, tag UID bounds, and the
//! timing defaults used by the scan loop and the connection supervisor.
//!
//! # Wire Compatibility
//!
//! The event labels and timestamp formats below are part of the deployed
//! JSON format consumed by downstream subscribers. Changing them breaks
//! every consumer of the team topic; treat them as frozen.

// ============================================================================
// Tag UID Constraints
// ============================================================================

/// Minimum tag UID length in bytes.
///
/// Short test credentials are accepted down to a single byte; ISO 14443
/// readers normally produce 4-10 byte UIDs.
pub const MIN_UID_BYTES: usize = 1;

/// Maximum tag UID length in bytes (per ISO 14443).
pub const MAX_UID_BYTES: usize = 10;

// ============================================================================
// Event Labels (Spanish, fixed by the deployed wire format)
// ============================================================================

/// Action label published when an entry is recorded.
///
/// # Value: `"entrada"`
pub const LABEL_ENTRY: &str = "entrada";

/// Action label published when an exit is recorded.
///
/// # Value: `"salida"`
pub const LABEL_EXIT: &str = "salida";

/// Action label published when an unregistered tag is scanned.
///
/// # Value: `"tarjeta rechazada"` (card rejected)
pub const LABEL_REJECTED: &str = "tarjeta rechazada";

/// Action label published when a tag that already completed its
/// entry/exit cycle is scanned again.
///
/// # Value: `"tarjeta sin pase"` (card without pass)
pub const LABEL_NO_PASS: &str = "tarjeta sin pase";

/// Display name published for tags that are not in the registry.
///
/// # Value: `"Desconocido"` (unknown)
pub const UNKNOWN_DISPLAY_NAME: &str = "Desconocido";

// ============================================================================
// Timestamp Formats
// ============================================================================

/// Date format for the event record (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Time format for the event record (`HH:MM:SS`).
pub const TIME_FORMAT: &str = "%H:%M:%S";

// ============================================================================
// Indicator Timing
// ============================================================================

/// Default dwell for the indicator after a granted scan (milliseconds).
///
/// The color is held this long before the indicator is cleared to off.
///
/// # Value: 600ms
pub const DEFAULT_GRANT_DWELL_MS: u64 = 600;

/// Default dwell for the indicator after a rejected or no-pass scan
/// (milliseconds).
///
/// Slightly longer than the grant dwell so that denial feedback is
/// unmistakable at the reader.
///
/// # Value: 700ms
pub const DEFAULT_DENY_DWELL_MS: u64 = 700;

// ============================================================================
// Connection Supervision
// ============================================================================

/// Initial reconnect delay for the broker connection (milliseconds).
///
/// # Value: 800ms
pub const DEFAULT_BACKOFF_INITIAL_MS: u64 = 800;

/// Maximum reconnect delay after repeated failures (milliseconds).
///
/// The backoff doubles on every consecutive failure until it reaches this
/// ceiling, and resets once a connection is established.
///
/// # Value: 30000ms (30 seconds)
pub const DEFAULT_BACKOFF_MAX_MS: u64 = 30_000;

/// Default MQTT broker port.
pub const DEFAULT_BROKER_PORT: u16 = 1883;

/// Default MQTT keep-alive interval (seconds).
pub const DEFAULT_MQTT_KEEP_ALIVE_SECS: u64 = 30;
