//! # eventfeed-store
//!
//! The state-synchronization core: turns asynchronous, possibly-failing
//! gateway fetches into observable, de-duplicated, diff-friendly UI state.
//!
//! - **[`Channel`]**: replay-last publish/subscribe slot over
//!   `tokio::sync::watch`, holding a [`ChannelState`]
//! - **[`LoadGate`]**: the load-once guard behind fetch de-duplication
//! - **[`EventListStore`]**: upcoming/finished/search channels
//! - **[`EventDetailStore`]**: single-event detail channel
//! - **[`ConnectivityGate`]**: deferred initial load on reachability
//! - **[`diff`]**: minimal edit script between two keyed lists
//!
//! All store operations are synchronous state transitions plus a
//! fire-and-forget task dispatch; they never block the caller. Fetch
//! completions are marshaled back by publishing through the channel's
//! watch sender.

#![deny(unsafe_code)]

pub mod channel;
pub mod connectivity;
pub mod detail_store;
pub mod diff;
pub mod list_store;

pub use channel::{Channel, ChannelState, LoadGate};
pub use connectivity::{ConnectivityGate, ConnectivitySource};
pub use detail_store::EventDetailStore;
pub use diff::{apply, diff, DiffOp, Keyed};
pub use list_store::EventListStore;
