//! `reqwest`-backed [`EventGateway`] against the live event directory.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use eventfeed_core::{EventDetail, EventSummary, FetchError, Result};

use crate::gateway::{ActiveFlag, EventGateway};
use crate::types::{EventDetailEnvelope, ListEventsEnvelope};

/// Default event directory base URL.
pub const DEFAULT_BASE_URL: &str = "https://event-api.dicoding.dev";

/// HTTP gateway to the event directory.
///
/// Transport configuration (timeouts, proxies) belongs to the injected
/// [`reqwest::Client`]; this type only maps requests and failures.
pub struct HttpEventGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEventGateway {
    /// Create a gateway against [`DEFAULT_BASE_URL`] with a fresh client.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a gateway against a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a gateway with a shared HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Perform a GET and decode the JSON envelope.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, ?query, "dispatching event directory request");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.json::<T>().await.map_err(transport)
    }
}

impl Default for HttpEventGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventGateway for HttpEventGateway {
    async fn list_events(&self, flag: ActiveFlag) -> Result<Vec<EventSummary>> {
        let envelope: ListEventsEnvelope = self
            .get_json("/events", &[("active", flag.as_query())])
            .await?;
        Ok(envelope.list_events)
    }

    async fn search_events(&self, query: &str) -> Result<Vec<EventSummary>> {
        let envelope: ListEventsEnvelope = self.get_json("/events", &[("q", query)]).await?;
        Ok(envelope.list_events)
    }

    async fn event_detail(&self, id: u64) -> Result<EventDetail> {
        let envelope: EventDetailEnvelope =
            self.get_json(&format!("/events/{id}"), &[]).await?;
        envelope.event.ok_or(FetchError::EmptyResult)
    }
}

/// Map a transport-level reqwest failure to the fetch taxonomy.
fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}
