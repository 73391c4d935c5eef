// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for query stage notifications.
//!
//! These are the human-readable lines the policy engine emits for each stage
//! of a query. They use Slack-style emphasis: `*bold*`, `_italic_` and
//! backtick code spans. Every message starts with a [`QueryHeader`].

use crate::model::{FailureEnvelope, QueryInfo, QueryStage, Resource};
use crate::utils::human_duration;
use std::fmt::{Display, Formatter};

/// Rendered in place of an instant the engine did not report.
const MISSING_INSTANT: &str = "-";

/// Common header: `<type> Query '<id>' _<state>_ [<tags>]`.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use query_herald::model::{QueryInfo, TimeEnvelope};
/// use query_herald::observability::messages::query::QueryHeader;
///
/// let info = QueryInfo {
///     id: "q1".into(),
///     state: "QUEUED".into(),
///     time: TimeEnvelope::new(Utc::now(), None, None),
///     resource: None,
///     user: None,
///     tags: vec!["etl".into(), "nightly".into()],
///     failure: None,
///     query_type: Some("SELECT".into()),
/// };
///
/// assert_eq!(QueryHeader { info: &info }.to_string(), "SELECT Query 'q1' _QUEUED_ [etl, nightly]");
/// ```
pub struct QueryHeader<'a> {
    pub info: &'a QueryInfo,
}

impl Display for QueryHeader<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if let Some(query_type) = &self.info.query_type {
            write!(f, "{} ", query_type)?;
        }
        write!(
            f,
            "Query '{}' _{}_ [{}]",
            self.info.id,
            self.info.state,
            self.info.tags.join(", ")
        )
    }
}

/// Query accepted by the engine.
///
/// # Log Level
/// `info!` - Important operational event
pub struct QuerySubmitted<'a> {
    pub info: &'a QueryInfo,
    pub user: &'a str,
    pub resource: &'a Resource,
}

impl Display for QuerySubmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} submitted by `{}` against `{}` created at {}",
            QueryHeader { info: self.info },
            self.user,
            self.resource,
            self.info.time.created_iso()
        )
    }
}

/// Query reached a terminal state without failure.
///
/// # Log Level
/// `info!` - Important operational event
pub struct QuerySucceeded<'a> {
    pub info: &'a QueryInfo,
    pub user: &'a str,
    pub resource: &'a Resource,
}

impl Display for QuerySucceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} submitted by `{}` against `{}` finished at {} (lasted {})",
            QueryHeader { info: self.info },
            self.user,
            self.resource,
            ended_at(self.info),
            human_duration(self.info.time.total_duration())
        )
    }
}

/// Query failed.
///
/// # Log Level
/// `warn!` - Potential issue requiring attention
pub struct QueryFailed<'a> {
    pub info: &'a QueryInfo,
    pub user: &'a str,
    pub resource: &'a Resource,
    pub failure: &'a FailureEnvelope,
}

impl Display for QueryFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} submitted by `{}` against `{}` failed at {} (lasted {})\n*{}* {}",
            QueryHeader { info: self.info },
            self.user,
            self.resource,
            ended_at(self.info),
            human_duration(self.info.time.total_duration()),
            self.failure.qualified_code(),
            self.failure.message_or_empty()
        )
    }
}

/// Split finished, with or without a failure.
///
/// A failed split appends a second line: `<category>:<code> => <message>`.
///
/// # Log Level
/// `info!` - Splits are routine even when they fail
pub struct SplitFinished<'a> {
    pub info: &'a QueryInfo,
    pub stage_id: &'a str,
    pub task_id: &'a str,
}

impl Display for SplitFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let verb = if self.info.failed() { "failed" } else { "completed" };
        write!(
            f,
            "{} {} split `{}.{}` (lasted {})",
            QueryHeader { info: self.info },
            verb,
            self.stage_id,
            self.task_id,
            human_duration(self.info.time.run_duration())
        )?;
        if let Some(failure) = &self.info.failure {
            write!(f, "\n{}", failure)?;
        }
        Ok(())
    }
}

/// Stage whose shape no policy rule recognizes.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct UnrecognizedStage<'a> {
    pub stage: &'a QueryStage,
}

impl Display for UnrecognizedStage<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unrecognized query stage: {:?}", self.stage)
    }
}

fn ended_at(info: &QueryInfo) -> String {
    info.time
        .ended_iso()
        .unwrap_or_else(|| MISSING_INSTANT.to_string())
}
