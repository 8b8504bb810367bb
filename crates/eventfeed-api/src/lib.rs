//! # eventfeed-api
//!
//! The remote event directory gateway: the seam between the stores in
//! `eventfeed-store` and the network.
//!
//! - **[`EventGateway`]**: object-safe async trait the stores consume.
//!   Pure request/response — no caching, no retry, no backoff.
//! - **[`HttpEventGateway`]**: `reqwest`-backed implementation against the
//!   directory's JSON API.
//! - **Wire envelopes**: [`types::ListEventsEnvelope`] and
//!   [`types::EventDetailEnvelope`] for the `listEvents`/`event` wrappers.

#![deny(unsafe_code)]

pub mod gateway;
pub mod http;
pub mod types;

pub use gateway::{ActiveFlag, EventGateway};
pub use http::{HttpEventGateway, DEFAULT_BASE_URL};
