//! The JSON event record.
//!
//! Field names are part of the deployed wire format (Spanish keys) and are
//! pinned with serde renames; the Rust-side names stay idiomatic.

use gatepass_core::EventTimestamp;
use serde::{Deserialize, Serialize};

/// One published scan outcome.
///
/// Serializes to:
///
/// ```json
/// {
///   "nombreEquipo": "JFMD-KAVG",
///   "nombreIntegrante": "Alice Example",
///   "id": "35 F2 B3 02",
///   "evento": { "accion": "entrada", "fecha": "10/05/2025", "hora": "12:46:06" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Team identifier; doubles as the MQTT topic.
    #[serde(rename = "nombreEquipo")]
    pub team: String,

    /// Participant display name.
    #[serde(rename = "nombreIntegrante")]
    pub participant: String,

    /// Canonical tag UID.
    #[serde(rename = "id")]
    pub tag_id: String,

    /// The action and when it happened.
    #[serde(rename = "evento")]
    pub body: EventBody,
}

/// Nested action object of the event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBody {
    /// Action label: `"entrada"`, `"salida"`, `"tarjeta rechazada"`, or
    /// `"tarjeta sin pase"`.
    #[serde(rename = "accion")]
    pub action: String,

    /// Date in `DD/MM/YYYY`.
    #[serde(rename = "fecha")]
    pub date: String,

    /// Time in `HH:MM:SS`.
    #[serde(rename = "hora")]
    pub time: String,
}

impl AccessEvent {
    /// Build a record from outcome data and a timestamp.
    pub fn new(
        team: impl Into<String>,
        participant: impl Into<String>,
        tag_id: impl Into<String>,
        action: impl Into<String>,
        timestamp: &EventTimestamp,
    ) -> Self {
        Self {
            team: team.into(),
            participant: participant.into(),
            tag_id: tag_id.into(),
            body: EventBody {
                action: action.into(),
                date: timestamp.date(),
                time: timestamp.time(),
            },
        }
    }

    /// Serialize to the wire JSON string.
    ///
    /// # Errors
    /// Returns `EventError::Serialize` if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AccessEvent {
        let ts = EventTimestamp::parse("10/05/2025", "12:46:06").unwrap();
        AccessEvent::new("JFMD-KAVG", "Alice Example", "35 F2 B3 02", "entrada", &ts)
    }

    #[test]
    fn test_wire_field_names() {
        let json = sample().to_json().unwrap();

        assert!(json.contains("\"nombreEquipo\":\"JFMD-KAVG\""));
        assert!(json.contains("\"nombreIntegrante\":\"Alice Example\""));
        assert!(json.contains("\"id\":\"35 F2 B3 02\""));
        assert!(json.contains("\"evento\""));
        assert!(json.contains("\"accion\":\"entrada\""));
        assert!(json.contains("\"fecha\":\"10/05/2025\""));
        assert!(json.contains("\"hora\":\"12:46:06\""));
    }

    #[test]
    fn test_round_trip_preserves_triple() {
        // Serialize then parse back: the (action, date, time) triple must
        // survive unchanged, including the timestamp formats.
        for action in [
            "entrada",
            "salida",
            "tarjeta rechazada",
            "tarjeta sin pase",
        ] {
            let ts = EventTimestamp::parse("01/12/2025", "23:59:59").unwrap();
            let event = AccessEvent::new("TEAM", "Someone", "AA", action, &ts);

            let json = event.to_json().unwrap();
            let back: AccessEvent = serde_json::from_str(&json).unwrap();

            assert_eq!(back, event);
            assert_eq!(back.body.action, action);
            assert_eq!(back.body.date, "01/12/2025");
            assert_eq!(back.body.time, "23:59:59");

            // And the timestamp fields still parse as a valid instant.
            let reparsed = EventTimestamp::parse(&back.body.date, &back.body.time).unwrap();
            assert_eq!(reparsed.date(), back.body.date);
            assert_eq!(reparsed.time(), back.body.time);
        }
    }
}
