// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::UNKNOWN_USER;
use crate::errors::SinkError;
use crate::policy::Severity;
use crate::sinks::should_notify;
use crate::traits::{Alert, AlertChannel, Emission, EventSink};

/// Default sink: logs through `tracing` inside a span scoped to the query's
/// user, then routes the record to the alert channel when notification applies.
pub struct TracingSink {
    alerts: Option<Box<dyn AlertChannel>>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self { alerts: None }
    }

    pub fn with_alerts(alerts: Box<dyn AlertChannel>) -> Self {
        Self {
            alerts: Some(alerts),
        }
    }

    pub fn alert_channel(&self) -> Option<&str> {
        self.alerts.as_ref().map(|alerts| alerts.name())
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn emit(&self, emission: &Emission<'_>) -> Result<(), SinkError> {
        let user = emission.user.unwrap_or(UNKNOWN_USER);
        let span = tracing::info_span!("query", user = user, query_id = emission.query_id);
        let _guard = span.enter();

        match emission.severity {
            Severity::Info => tracing::info!(notify = ?emission.notify, "{}", emission.message),
            Severity::Warn => tracing::warn!(notify = ?emission.notify, "{}", emission.message),
            Severity::Error => tracing::error!(notify = ?emission.notify, "{}", emission.message),
        }

        if let Some(alerts) = &self.alerts {
            if should_notify(emission.severity, emission.notify) {
                alerts.deliver(&Alert {
                    query_id: emission.query_id.to_string(),
                    user: user.to_string(),
                    severity: emission.severity,
                    text: emission.message.to_string(),
                })?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::stub::RecordingAlerts;
    use std::sync::Arc;

    fn emission(severity: Severity, notify: Option<bool>) -> Emission<'static> {
        Emission {
            query_id: "q1",
            user: None,
            severity,
            message: "Query 'q1' _FINISHED_ []",
            notify,
        }
    }

    #[test]
    fn test_routes_by_severity_and_override() {
        let alerts = Arc::new(RecordingAlerts::default());
        let sink = TracingSink::with_alerts(Box::new(alerts.clone()));

        sink.emit(&emission(Severity::Info, None)).unwrap();
        sink.emit(&emission(Severity::Warn, Some(false))).unwrap();
        assert!(alerts.delivered().is_empty());

        sink.emit(&emission(Severity::Info, Some(true))).unwrap();
        sink.emit(&emission(Severity::Warn, None)).unwrap();

        let delivered = alerts.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].severity, Severity::Info);
        assert_eq!(delivered[0].user, "unknown");
        assert_eq!(delivered[1].severity, Severity::Warn);
    }

    #[test]
    fn test_without_alert_channel_only_logs() {
        let sink = TracingSink::new();
        assert_eq!(sink.alert_channel(), None);
        assert!(sink.emit(&emission(Severity::Error, Some(true))).is_ok());
    }
}
