// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Default implementations of the listener's collaborators.
//!
//! * `TracingSink` - structured sink logging through `tracing`, scoped per user
//! * `LogAlertChannel` - alert channel on the `query_herald::alerts` target
//! * `StderrFallback` / `FileFallback` - emergency diagnostic channels
//!
//! A test-only `stub` module provides recording and failing doubles.

pub mod alert;
pub mod fallback;
#[cfg(test)]
pub mod stub;
pub mod tracing_sink;

pub use alert::LogAlertChannel;
pub use fallback::{FileFallback, StderrFallback};
pub use tracing_sink::TracingSink;

use crate::policy::Severity;

/// Whether a record goes to the alert channel.
///
/// An explicit override always wins; otherwise warnings and errors alert and
/// informational records do not.
pub fn should_notify(severity: Severity, notify: Option<bool>) -> bool {
    notify.unwrap_or(severity >= Severity::Warn)
}
