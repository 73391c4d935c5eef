// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SinkError;
use crate::policy::Severity;

/// One log record produced by the policy engine, ready for a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission<'a> {
    pub query_id: &'a str,
    /// Authenticated user of the query, used to scope the sink's logger.
    pub user: Option<&'a str>,
    pub severity: Severity,
    pub message: &'a str,
    pub notify: Option<bool>,
}

/// Structured destination for query stage records.
pub trait EventSink: Send + Sync {
    fn emit(&self, emission: &Emission<'_>) -> Result<(), SinkError>;

    fn name(&self) -> &'static str;
}

impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    fn emit(&self, emission: &Emission<'_>) -> Result<(), SinkError> {
        (**self).emit(emission)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
