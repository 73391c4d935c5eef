// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostic lines written to the fallback channel.
//!
//! These never go through `tracing`: they are only produced when processing
//! an event has already failed, so they must not depend on the structured
//! logging path.

use std::fmt::{Display, Formatter};

/// An entry point failed while normalizing, deciding or emitting.
///
/// # Example
/// ```
/// use query_herald::observability::messages::dispatch::EntryPointFailed;
///
/// let msg = EntryPointFailed {
///     entry_point: "query_completed",
///     detail: "sink rejected record",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "query-herald: error in query_completed, event dropped: sink rejected record"
/// );
/// ```
pub struct EntryPointFailed<'a> {
    pub entry_point: &'a str,
    pub detail: &'a str,
}

impl Display for EntryPointFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "query-herald: error in {}, event dropped: {}",
            self.entry_point, self.detail
        )
    }
}

/// Writing [`EntryPointFailed`] itself failed. Names only the entry point.
pub struct FallbackWriteFailed<'a> {
    pub entry_point: &'a str,
}

impl Display for FallbackWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "query-herald: error in {}", self.entry_point)
    }
}
