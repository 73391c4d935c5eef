// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SinkError;
use crate::policy::Severity;

/// A notification routed to an external alert channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub query_id: String,
    pub user: String,
    pub severity: Severity,
    pub text: String,
}

pub trait AlertChannel: Send + Sync {
    fn deliver(&self, alert: &Alert) -> Result<(), SinkError>;

    fn name(&self) -> &str;
}

impl<T: AlertChannel + ?Sized> AlertChannel for std::sync::Arc<T> {
    fn deliver(&self, alert: &Alert) -> Result<(), SinkError> {
        (**self).deliver(alert)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
