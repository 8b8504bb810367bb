//! Store for the upcoming/finished/search event lists.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use eventfeed_api::{ActiveFlag, EventGateway};
use eventfeed_core::EventSummary;

use crate::channel::{Channel, ChannelState, LoadGate};

/// Observable state for the three event list feeds.
///
/// `upcoming` and `finished` are load-once: the first dispatched load
/// engages the feed's [`LoadGate`] and later calls are no-ops until a
/// failure releases it. `search` is never gated; overlapping searches are
/// sequenced by a monotonic request counter so an older response can never
/// overwrite a newer one.
///
/// One store per screen instance; drop it with the screen. Load methods
/// must be called from within a tokio runtime — they dispatch the fetch on
/// a spawned task and return immediately.
pub struct EventListStore {
    gateway: Arc<dyn EventGateway>,
    upcoming: Channel<Vec<EventSummary>>,
    upcoming_gate: LoadGate,
    finished: Channel<Vec<EventSummary>>,
    finished_gate: LoadGate,
    search: Channel<Vec<EventSummary>>,
    search_seq: AtomicU64,
}

impl EventListStore {
    /// Create a store over the given gateway.
    pub fn new(gateway: Arc<dyn EventGateway>) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            upcoming: Channel::new(),
            upcoming_gate: LoadGate::new(),
            finished: Channel::new(),
            finished_gate: LoadGate::new(),
            search: Channel::new(),
            search_seq: AtomicU64::new(0),
        })
    }

    /// Subscribe to the upcoming events feed.
    pub fn upcoming(&self) -> watch::Receiver<ChannelState<Vec<EventSummary>>> {
        self.upcoming.subscribe()
    }

    /// Subscribe to the finished events feed.
    pub fn finished(&self) -> watch::Receiver<ChannelState<Vec<EventSummary>>> {
        self.finished.subscribe()
    }

    /// Subscribe to the search results overlay.
    pub fn search_results(&self) -> watch::Receiver<ChannelState<Vec<EventSummary>>> {
        self.search.subscribe()
    }

    /// Load the upcoming events list. No-op while its gate is engaged.
    pub fn load_upcoming(self: &Arc<Self>) {
        self.load_list(ActiveFlag::Upcoming);
    }

    /// Load the finished events list. No-op while its gate is engaged.
    pub fn load_finished(self: &Arc<Self>) {
        self.load_list(ActiveFlag::Finished);
    }

    /// Whether any list load has been dispatched and not failed since.
    ///
    /// Consumed by the connectivity gate to decide if a deferred initial
    /// load is still owed.
    pub fn has_loaded(&self) -> bool {
        self.upcoming_gate.is_engaged() || self.finished_gate.is_engaged()
    }

    /// Free-text search.
    ///
    /// An empty (or whitespace) query clears the search overlay and
    /// reverts to the default view without a gateway call; the upcoming
    /// and finished feeds are untouched. A non-empty query always fetches,
    /// even while an earlier search is still in flight — the latest issued
    /// request wins.
    pub fn search(self: &Arc<Self>, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            // Invalidate any in-flight search so it cannot resurrect the
            // overlay after the revert.
            let _ = self.search_seq.fetch_add(1, Ordering::AcqRel);
            self.search.clear();
            debug!("search cleared, reverting to default view");
            return;
        }

        let seq = self.search_seq.fetch_add(1, Ordering::AcqRel) + 1;
        self.search.begin_loading();

        let store = Arc::clone(self);
        let query = query.to_owned();
        let _ = tokio::spawn(async move {
            let result = store.gateway.search_events(&query).await;
            if store.search_seq.load(Ordering::Acquire) != seq {
                debug!(%query, "stale search response dropped");
                return;
            }
            match result {
                Ok(events) => {
                    debug!(%query, count = events.len(), "search resolved");
                    store.search.publish(events);
                }
                Err(err) => {
                    warn!(%query, error = %err, "search failed");
                    store.search.fail(err);
                }
            }
        });
    }

    fn parts(&self, flag: ActiveFlag) -> (&Channel<Vec<EventSummary>>, &LoadGate) {
        match flag {
            ActiveFlag::Upcoming => (&self.upcoming, &self.upcoming_gate),
            ActiveFlag::Finished => (&self.finished, &self.finished_gate),
        }
    }

    fn load_list(self: &Arc<Self>, flag: ActiveFlag) {
        let (channel, gate) = self.parts(flag);
        if !gate.try_engage() {
            debug!(?flag, "list load skipped, gate engaged");
            return;
        }
        channel.begin_loading();

        let store = Arc::clone(self);
        let _ = tokio::spawn(async move {
            let result = store.gateway.list_events(flag).await;
            let (channel, gate) = store.parts(flag);
            match result {
                Ok(events) => {
                    debug!(?flag, count = events.len(), "list loaded");
                    channel.publish(events);
                }
                Err(err) => {
                    warn!(?flag, error = %err, "list load failed");
                    gate.release();
                    channel.fail(err);
                }
            }
        });
    }
}
