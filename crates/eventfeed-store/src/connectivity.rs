//! Connectivity-gated deferred initial load.
//!
//! Replaces the original screen-controller booleans
//! (`isNetworkCallbackRegistered`, the reachability callback) with an
//! explicit `Unregistered -> Registered -> Unregistered` state machine that
//! owns its watcher task.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

/// Source of network reachability transitions.
///
/// Implementations emit one `()` per unavailable-to-available transition.
/// Unsubscription is dropping the receiver.
pub trait ConnectivitySource: Send + Sync {
    /// Subscribe to availability events.
    fn subscribe(&self) -> broadcast::Receiver<()>;
}

/// Triggers a deferred initial load when reachability returns, at most
/// until the first load sticks.
///
/// `Registered` is the presence of the watcher task. Both [`register`] and
/// [`unregister`] are idempotent, and the watcher is aborted on drop so a
/// torn-down screen cannot leak the observer.
///
/// [`register`]: ConnectivityGate::register
/// [`unregister`]: ConnectivityGate::unregister
#[derive(Debug, Default)]
pub struct ConnectivityGate {
    watcher: Option<JoinHandle<()>>,
}

impl ConnectivityGate {
    /// Create an unregistered gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a watcher is currently registered.
    pub fn is_registered(&self) -> bool {
        self.watcher.is_some()
    }

    /// Register against a connectivity source. No-op while registered.
    ///
    /// On every availability event, `on_available` runs only while
    /// `has_loaded` reports false. Once a load has stuck, later events do
    /// nothing.
    pub fn register<L, F>(&mut self, source: &dyn ConnectivitySource, has_loaded: L, on_available: F)
    where
        L: Fn() -> bool + Send + 'static,
        F: Fn() + Send + 'static,
    {
        if self.watcher.is_some() {
            debug!("connectivity gate already registered");
            return;
        }

        let mut rx = source.subscribe();
        self.watcher = Some(tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) => {
                        if !has_loaded() {
                            debug!("reachability restored, dispatching deferred load");
                            on_available();
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }));
    }

    /// Unregister the watcher. Idempotent; safe to call when never
    /// registered.
    pub fn unregister(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}

impl Drop for ConnectivityGate {
    fn drop(&mut self) {
        self.unregister();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct FakeSource {
        tx: broadcast::Sender<()>,
    }

    impl FakeSource {
        fn new() -> Self {
            let (tx, _) = broadcast::channel(8);
            Self { tx }
        }

        fn go_available(&self) {
            let _ = self.tx.send(());
        }
    }

    impl ConnectivitySource for FakeSource {
        fn subscribe(&self) -> broadcast::Receiver<()> {
            self.tx.subscribe()
        }
    }

    async fn eventually(check: impl Fn() -> bool) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while !check() {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("condition not reached in time");
    }

    /// Let the watcher task drain anything pending.
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn triggers_load_while_nothing_loaded() {
        let source = FakeSource::new();
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);

        let mut gate = ConnectivityGate::new();
        gate.register(
            &source,
            || false,
            move || {
                let _ = counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        source.go_available();
        eventually(|| loads.load(Ordering::SeqCst) == 1).await;
    }

    #[tokio::test]
    async fn does_not_retrigger_after_successful_load() {
        let source = FakeSource::new();
        let loaded = Arc::new(AtomicBool::new(false));
        let loads = Arc::new(AtomicUsize::new(0));

        let mut gate = ConnectivityGate::new();
        {
            let loaded_probe = Arc::clone(&loaded);
            let loaded = Arc::clone(&loaded);
            let loads = Arc::clone(&loads);
            gate.register(
                &source,
                move || loaded_probe.load(Ordering::SeqCst),
                move || {
                    // The triggered load succeeds immediately.
                    loaded.store(true, Ordering::SeqCst);
                    let _ = loads.fetch_add(1, Ordering::SeqCst);
                },
            );
        }

        source.go_available();
        eventually(|| loads.load(Ordering::SeqCst) == 1).await;

        source.go_available();
        settle().await;
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn register_is_idempotent() {
        let source = FakeSource::new();
        let loads = Arc::new(AtomicUsize::new(0));

        let mut gate = ConnectivityGate::new();
        for _ in 0..2 {
            let loads = Arc::clone(&loads);
            gate.register(
                &source,
                || false,
                move || {
                    let _ = loads.fetch_add(1, Ordering::SeqCst);
                },
            );
        }
        assert!(gate.is_registered());

        source.go_available();
        eventually(|| loads.load(Ordering::SeqCst) >= 1).await;
        settle().await;
        // A second registration would have doubled the count.
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unregister_stops_triggering_and_is_idempotent() {
        let source = FakeSource::new();
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);

        let mut gate = ConnectivityGate::new();
        gate.register(
            &source,
            || false,
            move || {
                let _ = counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        gate.unregister();
        gate.unregister();
        assert!(!gate.is_registered());

        source.go_available();
        settle().await;
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unregister_without_register_is_safe() {
        let mut gate = ConnectivityGate::new();
        gate.unregister();
        assert!(!gate.is_registered());
    }
}
