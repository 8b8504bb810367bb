//! Wire envelopes for the event directory's JSON responses.
//!
//! The directory wraps every payload in a `{error, message, ...}` envelope.
//! List responses carry `listEvents`; the detail response carries a single
//! `event` object which may be `null` even on a 2xx status.

use serde::Deserialize;

use eventfeed_core::{EventDetail, EventSummary};

/// Envelope for `GET /events` responses (both list and search).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsEnvelope {
    /// Directory-reported error flag.
    #[serde(default)]
    pub error: bool,
    /// Directory-reported status message.
    #[serde(default)]
    pub message: String,
    /// The event summaries.
    #[serde(default)]
    pub list_events: Vec<EventSummary>,
}

/// Envelope for `GET /events/{id}` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailEnvelope {
    /// Directory-reported error flag.
    #[serde(default)]
    pub error: bool,
    /// Directory-reported status message.
    #[serde(default)]
    pub message: String,
    /// The event detail; `null` when the id is unknown.
    #[serde(default)]
    pub event: Option<EventDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_decodes() {
        let json = r#"{
            "error": false,
            "message": "success",
            "listEvents": [{"id": 1, "name": "DevCoach", "mediaCover": "https://img.example/c.png"}]
        }"#;
        let envelope: ListEventsEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.error);
        assert_eq!(envelope.list_events.len(), 1);
        assert_eq!(envelope.list_events[0].name, "DevCoach");
    }

    #[test]
    fn detail_envelope_tolerates_null_event() {
        let json = r#"{"error": true, "message": "not found", "event": null}"#;
        let envelope: EventDetailEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.event.is_none());
    }
}
