//! The gateway trait consumed by the stores.

use async_trait::async_trait;
use eventfeed_core::{EventDetail, EventSummary, Result};

/// Which event list to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveFlag {
    /// Events that have not started yet (`active=1`).
    Upcoming,
    /// Events that already ended (`active=0`).
    Finished,
}

impl ActiveFlag {
    /// The `active` query parameter value.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Upcoming => "1",
            Self::Finished => "0",
        }
    }
}

/// Remote event directory.
///
/// Implementations fetch on the caller's task and complete on whatever
/// executor drives them; the stores marshal results back into their
/// observable channels. Failures are always a [`eventfeed_core::FetchError`],
/// never a panic.
#[async_trait]
pub trait EventGateway: Send + Sync {
    /// Fetch event summaries filtered by activity flag.
    async fn list_events(&self, flag: ActiveFlag) -> Result<Vec<EventSummary>>;

    /// Fetch event summaries matching a free-text query.
    async fn search_events(&self, query: &str) -> Result<Vec<EventSummary>>;

    /// Fetch the full detail for one event.
    async fn event_detail(&self, id: u64) -> Result<EventDetail>;
}
