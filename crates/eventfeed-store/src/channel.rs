//! Observable channel state and the load-once gate.
//!
//! A [`Channel`] is one logical data feed (e.g. "upcoming events"). It
//! replaces the original push-observable pattern with a thin wrapper over
//! `tokio::sync::watch`: new subscribers observe the latest state
//! immediately (`borrow`/`wait_for`), and every transition wakes waiters.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use eventfeed_core::FetchError;

/// The latest state of one data feed.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelState<T> {
    /// Last successfully fetched value. Retained while a refresh is in
    /// flight — `loading` never wipes prior data.
    pub data: Option<T>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Failure of the most recent fetch; cleared by the next success.
    pub error: Option<FetchError>,
}

impl<T> ChannelState<T> {
    /// Whether the feed has finished its current fetch with an outcome.
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}

impl<T> Default for ChannelState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Replay-last publish/subscribe slot for one feed.
pub struct Channel<T> {
    tx: watch::Sender<ChannelState<T>>,
}

impl<T> Channel<T> {
    /// Create an empty channel (no data, not loading, no error).
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(ChannelState::default()),
        }
    }

    /// Subscribe to this feed.
    ///
    /// The receiver observes the current state immediately and is woken on
    /// every subsequent transition. Unsubscription is dropping the receiver.
    pub fn subscribe(&self) -> watch::Receiver<ChannelState<T>> {
        self.tx.subscribe()
    }

    /// Snapshot the current state.
    pub fn state(&self) -> ChannelState<T>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Mark a fetch as in flight. Prior data is retained; a stale error is
    /// cleared so the screen can drop its retry affordance while waiting.
    pub(crate) fn begin_loading(&self) {
        self.tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// Publish a successful fetch result.
    pub(crate) fn publish(&self, data: T) {
        self.tx.send_modify(|state| {
            state.data = Some(data);
            state.loading = false;
            state.error = None;
        });
    }

    /// Surface a failed fetch.
    pub(crate) fn fail(&self, error: FetchError) {
        self.tx.send_modify(|state| {
            state.loading = false;
            state.error = Some(error);
        });
    }

    /// Reset to the empty state.
    pub(crate) fn clear(&self) {
        let _ = self.tx.send(ChannelState::default());
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Load-once gate: prevents a redundant fetch once a feed's load has been
/// dispatched.
///
/// Engaged synchronously at dispatch time so two back-to-back load calls
/// issue exactly one request. Released on failure so a retry can fetch
/// again; held forever after success. Never reset by re-subscription.
#[derive(Debug, Default)]
pub struct LoadGate {
    engaged: AtomicBool,
}

impl LoadGate {
    /// Create a disengaged gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to engage the gate. Returns `true` exactly once until released.
    pub fn try_engage(&self) -> bool {
        self.engaged
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the gate after a failed fetch.
    pub fn release(&self) {
        self.engaged.store(false, Ordering::Release);
    }

    /// Whether the gate is currently engaged.
    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_engages_once() {
        let gate = LoadGate::new();
        assert!(gate.try_engage());
        assert!(!gate.try_engage());
        assert!(gate.is_engaged());
    }

    #[test]
    fn released_gate_engages_again() {
        let gate = LoadGate::new();
        assert!(gate.try_engage());
        gate.release();
        assert!(gate.try_engage());
    }

    #[test]
    fn loading_retains_prior_data() {
        let channel: Channel<Vec<u32>> = Channel::new();
        channel.publish(vec![1, 2]);
        channel.begin_loading();

        let state = channel.state();
        assert!(state.loading);
        assert_eq!(state.data, Some(vec![1, 2]));
    }

    #[test]
    fn success_clears_error() {
        let channel: Channel<Vec<u32>> = Channel::new();
        channel.fail(FetchError::EmptyResult);
        assert!(channel.state().error.is_some());

        channel.publish(vec![3]);
        let state = channel.state();
        assert_eq!(state.error, None);
        assert_eq!(state.data, Some(vec![3]));
    }

    #[test]
    fn failure_clears_loading_and_keeps_data() {
        let channel: Channel<Vec<u32>> = Channel::new();
        channel.publish(vec![1]);
        channel.begin_loading();
        channel.fail(FetchError::Transport("offline".into()));

        let state = channel.state();
        assert!(!state.loading);
        assert_eq!(state.data, Some(vec![1]));
        assert_eq!(state.error, Some(FetchError::Transport("offline".into())));
    }

    #[tokio::test]
    async fn subscriber_replays_latest_state() {
        let channel: Channel<Vec<u32>> = Channel::new();
        channel.publish(vec![7]);

        // Subscribed after the publish, still sees it.
        let rx = channel.subscribe();
        assert_eq!(rx.borrow().data, Some(vec![7]));
    }

    #[tokio::test]
    async fn subscriber_observes_transitions() {
        let channel: Channel<Vec<u32>> = Channel::new();
        let mut rx = channel.subscribe();

        channel.begin_loading();
        rx.changed().await.unwrap();
        assert!(rx.borrow().loading);

        channel.publish(vec![9]);
        rx.changed().await.unwrap();
        let state = rx.borrow().clone();
        assert!(state.is_settled());
        assert_eq!(state.data, Some(vec![9]));
    }
}
