// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one stage against the policy.
///
/// `message == None` means the stage is suppressed: nothing is logged and
/// nothing is routed. `notify` forces (`Some(true)`) or suppresses
/// (`Some(false)`) alert routing; `None` leaves routing to the sink's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub severity: Severity,
    pub message: Option<String>,
    pub notify: Option<bool>,
}

impl Decision {
    pub fn emit(severity: Severity, message: String, notify: Option<bool>) -> Self {
        Self {
            severity,
            message: Some(message),
            notify,
        }
    }

    pub fn suppressed(severity: Severity, notify: Option<bool>) -> Self {
        Self {
            severity,
            message: None,
            notify,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.message.is_none()
    }
}
