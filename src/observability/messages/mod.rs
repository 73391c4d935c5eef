// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` so its wording lives in exactly
//! one place. Operational messages also implement [`StructuredLog`], which
//! logs them at their documented level with their fields attached.
//!
//! # Organization
//!
//! * `query` - Stage notifications chosen by the policy engine
//! * `listener` - Listener bootstrap and replay events
//! * `dispatch` - Fallback diagnostics written when processing fails
//!
//! # Usage Pattern
//!
//! ```rust
//! use query_herald::observability::messages::listener::ReplayStarted;
//! use query_herald::observability::messages::StructuredLog;
//!
//! let msg = ReplayStarted {
//!     events_path: "events.json",
//!     event_count: 12,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod dispatch;
pub mod listener;
pub mod query;

/// Logs a message with its fields as structured tracing attributes.
pub trait StructuredLog {
    fn log(&self);

    /// A span carrying the same fields, named `name`.
    fn span(&self, name: &str) -> Span;
}
