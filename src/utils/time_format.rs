// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

const UNITS: [(&str, u128); 5] = [
    ("d", 86_400_000),
    ("h", 3_600_000),
    ("m", 60_000),
    ("s", 1_000),
    ("ms", 1),
];

/// Render a duration for humans, largest unit first.
///
/// Only non-zero components are shown and anything below a millisecond is
/// dropped. A zero (or sub-millisecond) duration renders as `0s`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use query_herald::utils::human_duration;
///
/// assert_eq!(human_duration(Duration::from_secs(11)), "11s");
/// assert_eq!(human_duration(Duration::from_millis(3_723_250)), "1h 2m 3s 250ms");
/// ```
pub fn human_duration(duration: Duration) -> String {
    let mut remaining = duration.as_millis();
    if remaining == 0 {
        return "0s".to_string();
    }

    let mut parts = Vec::new();
    for (suffix, unit_ms) in UNITS {
        let count = remaining / unit_ms;
        if count > 0 {
            parts.push(format!("{}{}", count, suffix));
            remaining %= unit_ms;
        }
    }
    parts.join(" ")
}

/// RFC 3339 rendering with millisecond precision and a `Z` suffix.
pub fn iso_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
