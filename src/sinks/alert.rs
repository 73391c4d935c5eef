// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::ALERT_TARGET;
use crate::errors::SinkError;
use crate::policy::Severity;
use crate::traits::{Alert, AlertChannel};

/// Alert channel that logs alerts on a dedicated tracing target, so a
/// subscriber layer or log shipper can forward them to the chat channel.
pub struct LogAlertChannel {
    channel: String,
}

impl LogAlertChannel {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl AlertChannel for LogAlertChannel {
    fn deliver(&self, alert: &Alert) -> Result<(), SinkError> {
        let channel = self.channel.as_str();
        match alert.severity {
            Severity::Info => tracing::info!(
                target: ALERT_TARGET,
                channel,
                user = alert.user.as_str(),
                query_id = alert.query_id.as_str(),
                "{}", alert.text
            ),
            Severity::Warn | Severity::Error => tracing::warn!(
                target: ALERT_TARGET,
                channel,
                user = alert.user.as_str(),
                query_id = alert.query_id.as_str(),
                severity = %alert.severity,
                "{}", alert.text
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.channel
    }
}
