// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for listener bootstrap and event replay.
//!
//! This module contains message types for logging events related to:
//! * Listener construction from configuration
//! * Replay of recorded engine events
//! * Stages suppressed by policy

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Listener built and ready to receive events.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use query_herald::observability::messages::listener::ListenerStarted;
///
/// let msg = ListenerStarted {
///     sink: "tracing",
///     alert_channel: Some("#query-alerts"),
///     fallback: "stderr",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ListenerStarted<'a> {
    pub sink: &'a str,
    pub alert_channel: Option<&'a str>,
    pub fallback: &'a str,
}

impl Display for ListenerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Query listener started: sink={}, alerts={}, fallback={}",
            self.sink,
            self.alert_channel.unwrap_or("disabled"),
            self.fallback
        )
    }
}

impl StructuredLog for ListenerStarted<'_> {
    fn log(&self) {
        tracing::info!(
            sink = self.sink,
            alert_channel = self.alert_channel,
            fallback = self.fallback,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "listener",
            span_name = name,
            sink = self.sink,
            fallback = self.fallback,
        )
    }
}

/// Replay of a recorded event file started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReplayStarted<'a> {
    pub events_path: &'a str,
    pub event_count: usize,
}

impl Display for ReplayStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Replaying {} events from {}",
            self.event_count, self.events_path
        )
    }
}

impl StructuredLog for ReplayStarted<'_> {
    fn log(&self) {
        tracing::info!(
            events_path = self.events_path,
            event_count = self.event_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "replay",
            span_name = name,
            events_path = self.events_path,
            event_count = self.event_count,
        )
    }
}

/// Replay finished; every event was dispatched.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReplayCompleted {
    pub event_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ReplayCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Replay completed: {} events dispatched in {:?}",
            self.event_count, self.duration
        )
    }
}

impl StructuredLog for ReplayCompleted {
    fn log(&self) {
        tracing::info!(
            event_count = self.event_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "replay_completed",
            span_name = name,
            event_count = self.event_count,
            duration = ?self.duration,
        )
    }
}

/// Stage dropped because its policy gate is closed.
///
/// # Log Level
/// `debug!` - Expected, high-volume
pub struct StageSuppressed<'a> {
    pub query_id: &'a str,
    pub stage: &'a str,
}

impl Display for StageSuppressed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Suppressed {} stage of query '{}' by policy",
            self.stage, self.query_id
        )
    }
}

impl StructuredLog for StageSuppressed<'_> {
    fn log(&self) {
        tracing::debug!(query_id = self.query_id, stage = self.stage, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage_suppressed",
            span_name = name,
            query_id = self.query_id,
            stage = self.stage,
        )
    }
}
