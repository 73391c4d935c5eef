// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::utils::iso_instant;

/// Creation, start and end instants of a query or one of its splits.
///
/// Every derived duration is total: a missing instant, or an instant that
/// precedes the one it is measured from, derives `Duration::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEnvelope {
    pub created: DateTime<Utc>,
    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
}

impl TimeEnvelope {
    pub fn new(
        created: DateTime<Utc>,
        started: Option<DateTime<Utc>>,
        ended: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created,
            started,
            ended,
        }
    }

    /// Time spent queued before execution started.
    pub fn wait_duration(&self) -> Duration {
        self.started
            .map(|started| between(self.created, started))
            .unwrap_or(Duration::ZERO)
    }

    /// Time spent executing.
    pub fn run_duration(&self) -> Duration {
        match (self.started, self.ended) {
            (Some(started), Some(ended)) => between(started, ended),
            _ => Duration::ZERO,
        }
    }

    /// Wall-clock time from creation to end.
    pub fn total_duration(&self) -> Duration {
        self.ended
            .map(|ended| between(self.created, ended))
            .unwrap_or(Duration::ZERO)
    }

    pub fn created_iso(&self) -> String {
        iso_instant(self.created)
    }

    pub fn started_iso(&self) -> Option<String> {
        self.started.map(iso_instant)
    }

    pub fn ended_iso(&self) -> Option<String> {
        self.ended.map(iso_instant)
    }
}

fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Duration {
    (to - from).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_absent_instants_derive_zero() {
        let time = TimeEnvelope::new(t0(), None, None);
        assert_eq!(time.wait_duration(), Duration::ZERO);
        assert_eq!(time.run_duration(), Duration::ZERO);
        assert_eq!(time.total_duration(), Duration::ZERO);
        assert_eq!(time.started_iso(), None);
        assert_eq!(time.ended_iso(), None);
    }

    #[test]
    fn test_durations_from_all_instants() {
        let time = TimeEnvelope::new(
            t0(),
            Some(t0() + TimeDelta::seconds(5)),
            Some(t0() + TimeDelta::seconds(20)),
        );
        assert_eq!(time.wait_duration(), Duration::from_secs(5));
        assert_eq!(time.run_duration(), Duration::from_secs(15));
        assert_eq!(time.total_duration(), Duration::from_secs(20));
    }

    #[test]
    fn test_split_in_flight_has_wait_but_no_run() {
        let time = TimeEnvelope::new(t0(), Some(t0() + TimeDelta::seconds(2)), None);
        assert_eq!(time.wait_duration(), Duration::from_secs(2));
        assert_eq!(time.run_duration(), Duration::ZERO);
        assert_eq!(time.total_duration(), Duration::ZERO);
    }

    #[test]
    fn test_skewed_instants_clamp_to_zero() {
        let time = TimeEnvelope::new(t0(), Some(t0() - TimeDelta::seconds(1)), None);
        assert_eq!(time.wait_duration(), Duration::ZERO);
    }

    #[test]
    fn test_iso_renderings() {
        let time = TimeEnvelope::new(t0(), None, Some(t0() + TimeDelta::milliseconds(1500)));
        assert_eq!(time.created_iso(), "2024-05-17T09:00:00.000Z");
        assert_eq!(time.ended_iso().as_deref(), Some("2024-05-17T09:00:01.500Z"));
    }
}
