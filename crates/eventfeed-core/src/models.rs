//! Event data model.
//!
//! Field names follow the remote directory's camelCase JSON so the wire
//! envelopes in `eventfeed-api` can deserialize these structs directly.

use serde::{Deserialize, Serialize};

/// A single event as it appears in list responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Unique event id.
    pub id: u64,
    /// Event name.
    pub name: String,
    /// Cover image URL, if the event has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_cover: Option<String>,
}

/// Full detail for a single event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// Unique event id.
    pub id: u64,
    /// Event name.
    pub name: String,
    /// One-line summary.
    pub summary: String,
    /// Long description; HTML-formatted text.
    pub description: String,
    /// Logo image URL.
    pub image_logo: String,
    /// Cover image URL.
    pub media_cover: String,
    /// Event category.
    pub category: String,
    /// Organizer name.
    pub owner_name: String,
    /// Host city.
    pub city_name: String,
    /// Registration quota. Absent when the event has no cap published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<u32>,
    /// Registered attendee count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrants: Option<u32>,
    /// Start time, as the opaque string the directory sends.
    pub begin_time: String,
    /// End time, as the opaque string the directory sends.
    pub end_time: String,
    /// Registration link, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl EventDetail {
    /// Remaining registration slots: `quota - registrants`.
    ///
    /// Returns `None` when no quota is published. Missing `registrants`
    /// counts as zero.
    pub fn available_quota(&self) -> Option<i64> {
        self.quota
            .map(|q| i64::from(q) - i64::from(self.registrants.unwrap_or(0)))
    }

    /// Whether the event is full: no published quota, or no slots left.
    pub fn is_full(&self) -> bool {
        !self.available_quota().is_some_and(|q| q > 0)
    }
}
