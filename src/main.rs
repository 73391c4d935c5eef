// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::fs;
use std::sync::Arc;
use std::time::Instant;
use query_herald::config::load_and_validate_config;
use query_herald::dispatch::QueryListener;
use query_herald::events::EngineEvent;
use query_herald::observability::messages::listener::{ReplayCompleted, ReplayStarted};
use query_herald::observability::messages::StructuredLog;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

/// Replays a recorded stream of engine events through a listener built from
/// config. Events are dispatched concurrently, the way an engine would call
/// the listener from its own worker threads.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <config.(yaml|toml)> <events.json>", args[0]);
        eprintln!("Example: {} configs/listener.yaml configs/events/sample.json", args[0]);
        std::process::exit(1);
    }
    let config_path = &args[1];
    let events_path = &args[2];

    let config = load_and_validate_config(config_path)
        .with_context(|| format!("loading config {}", config_path))?;
    let listener = Arc::new(QueryListener::from_config(&config)?);

    let content = fs::read_to_string(events_path)
        .with_context(|| format!("reading events {}", events_path))?;
    let events: Vec<EngineEvent> = serde_json::from_str(&content)
        .with_context(|| format!("parsing events {}", events_path))?;

    let started_msg = ReplayStarted {
        events_path,
        event_count: events.len(),
    };
    started_msg.log();

    let start_time = Instant::now();
    let event_count = events.len();
    async {
        let handles: Vec<_> = events
            .into_iter()
            .map(|event| {
                let listener = Arc::clone(&listener);
                tokio::task::spawn_blocking(move || listener.handle(&event))
            })
            .collect();

        for handle in handles {
            handle.await.context("dispatch task did not complete")?;
        }
        Ok::<(), anyhow::Error>(())
    }
    .instrument(started_msg.span("replay"))
    .await?;

    ReplayCompleted {
        event_count,
        duration: start_time.elapsed(),
    }
    .log();

    Ok(())
}
