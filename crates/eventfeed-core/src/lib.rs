//! # eventfeed-core
//!
//! Foundation types for the eventfeed client core.
//!
//! This crate provides the shared vocabulary the other eventfeed crates
//! depend on:
//!
//! - **Models**: [`models::EventSummary`] and [`models::EventDetail`],
//!   mirroring the remote event directory's JSON
//! - **Errors**: [`errors::FetchError`] taxonomy via `thiserror`
//! - **Logging**: [`logging::init`] tracing bootstrap for binaries
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other eventfeed crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod logging;
pub mod models;

pub use errors::{FetchError, Result};
pub use models::{EventDetail, EventSummary};
