//! Store for a single event's detail.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use eventfeed_api::EventGateway;
use eventfeed_core::EventDetail;

use crate::channel::{Channel, ChannelState, LoadGate};

/// Observable state for one event detail screen.
///
/// One store per screen instance; drop it with the screen.
pub struct EventDetailStore {
    gateway: Arc<dyn EventGateway>,
    detail: Channel<EventDetail>,
    gate: LoadGate,
}

impl EventDetailStore {
    /// Create a store over the given gateway.
    pub fn new(gateway: Arc<dyn EventGateway>) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            detail: Channel::new(),
            gate: LoadGate::new(),
        })
    }

    /// Subscribe to the detail feed.
    pub fn detail(&self) -> watch::Receiver<ChannelState<EventDetail>> {
        self.detail.subscribe()
    }

    /// Load the detail for `id`. No-op while the gate is engaged, even
    /// when `id` differs from the previously loaded event.
    ///
    /// The id-insensitive gate is faithful to the source application and
    /// is a known defect: a screen instance reused for a different event
    /// keeps showing the first one. A failed fetch releases the gate so
    /// the same call can retry. A structurally successful response with no
    /// event body surfaces [`eventfeed_core::FetchError::EmptyResult`].
    pub fn load_detail(self: &Arc<Self>, id: u64) {
        if !self.gate.try_engage() {
            debug!(id, "detail load skipped, gate engaged");
            return;
        }
        self.detail.begin_loading();

        let store = Arc::clone(self);
        let _ = tokio::spawn(async move {
            match store.gateway.event_detail(id).await {
                Ok(detail) => {
                    debug!(id, name = %detail.name, "detail loaded");
                    store.detail.publish(detail);
                }
                Err(err) => {
                    warn!(id, error = %err, "detail load failed");
                    store.gate.release();
                    store.detail.fail(err);
                }
            }
        });
    }
}
