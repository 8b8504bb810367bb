//! Terminal front end for the eventfeed client core.
//!
//! Thin presentation shim: builds the HTTP gateway, drives a store,
//! waits for the feed to settle, and prints the result. All behavioral
//! contracts live in `eventfeed-store`.

#![deny(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tokio::time::timeout;

use eventfeed_api::{HttpEventGateway, DEFAULT_BASE_URL};
use eventfeed_core::{EventDetail, EventSummary};
use eventfeed_store::{ChannelState, EventDetailStore, EventListStore};

/// How long to wait for a feed before giving up.
const FETCH_DEADLINE: Duration = Duration::from_secs(30);

#[derive(Debug, Parser)]
#[command(name = "eventfeed", about = "Browse the remote event directory")]
struct Args {
    /// Event directory base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List upcoming events.
    Upcoming,
    /// List finished events.
    Finished,
    /// Search events by free text.
    Search {
        /// Query text.
        query: String,
    },
    /// Show one event's detail.
    Detail {
        /// Event id.
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    eventfeed_core::logging::init("eventfeed=info");
    let args = Args::parse();

    tracing::debug!(base_url = %args.base_url, "starting eventfeed");
    let gateway = Arc::new(HttpEventGateway::with_base_url(args.base_url));

    match args.command {
        Command::Upcoming => {
            let store = EventListStore::new(gateway);
            let mut rx = store.upcoming();
            store.load_upcoming();
            print_list("Upcoming events", settled(&mut rx).await?)
        }
        Command::Finished => {
            let store = EventListStore::new(gateway);
            let mut rx = store.finished();
            store.load_finished();
            print_list("Finished events", settled(&mut rx).await?)
        }
        Command::Search { query } => {
            let store = EventListStore::new(gateway);
            let mut rx = store.search_results();
            store.search(&query);
            print_list(&format!("Results for \"{query}\""), settled(&mut rx).await?)
        }
        Command::Detail { id } => {
            let store = EventDetailStore::new(gateway);
            let mut rx = store.detail();
            store.load_detail(id);
            print_detail(settled(&mut rx).await?)
        }
    }
}

/// Wait until the feed carries data or an error.
async fn settled<T: Clone>(
    rx: &mut watch::Receiver<ChannelState<T>>,
) -> Result<ChannelState<T>> {
    let state = timeout(FETCH_DEADLINE, rx.wait_for(ChannelState::is_settled))
        .await
        .context("timed out waiting for the event directory")?
        .context("store dropped before the feed settled")?
        .clone();
    Ok(state)
}

fn print_list(heading: &str, state: ChannelState<Vec<EventSummary>>) -> Result<ExitCode> {
    if let Some(error) = state.error {
        eprintln!("{error}");
        return Ok(ExitCode::FAILURE);
    }

    let events = state.data.unwrap_or_default();
    println!("{heading} ({}):", events.len());
    for event in events {
        println!("  [{}] {}", event.id, event.name);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_detail(state: ChannelState<EventDetail>) -> Result<ExitCode> {
    if let Some(error) = state.error {
        eprintln!("{error}");
        return Ok(ExitCode::FAILURE);
    }

    let Some(event) = state.data else {
        eprintln!("no event data");
        return Ok(ExitCode::FAILURE);
    };

    println!("{} — {}", event.name, event.category);
    println!("  by {} in {}", event.owner_name, event.city_name);
    println!("  {} → {}", event.begin_time, event.end_time);
    match event.available_quota() {
        Some(left) if !event.is_full() => println!("  {left} slots left"),
        _ => println!("  full"),
    }
    if let Some(link) = &event.link {
        println!("  {link}");
    }
    println!("\n{}", event.summary);
    Ok(ExitCode::SUCCESS)
}
