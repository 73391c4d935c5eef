// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event payloads as the query engine reports them.
//!
//! The three shapes differ in which instants they guarantee and in how they
//! describe failures. All of them deserialize from camelCase JSON so the
//! replay binary and hosts can feed recorded events directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A query was accepted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCreatedEvent {
    pub query_id: String,
    pub query_state: String,
    pub create_time: DateTime<Utc>,
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One split of a query finished, possibly with a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCompletedEvent {
    pub query_id: String,
    pub stage_id: String,
    pub task_id: String,
    pub create_time: DateTime<Utc>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure: Option<SplitFailureInfo>,
}

/// Failure attached to a split: an exception type and its message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitFailureInfo {
    pub failure_type: String,
    pub failure_message: String,
}

/// A query reached a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCompletedEvent {
    pub query_id: String,
    pub query_state: String,
    pub create_time: DateTime<Utc>,
    pub execution_start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub failure: Option<QueryFailureInfo>,
}

/// Failure attached to a completed query, classified by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFailureInfo {
    pub error_code: ErrorCode,
    #[serde(default)]
    pub failure_type: Option<String>,
    #[serde(default)]
    pub failure_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCode {
    pub code: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
}

/// The engine's structured error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    UserError,
    InternalError,
    InsufficientResources,
    External,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UserError => "USER_ERROR",
            ErrorType::InternalError => "INTERNAL_ERROR",
            ErrorType::InsufficientResources => "INSUFFICIENT_RESOURCES",
            ErrorType::External => "EXTERNAL",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any of the three engine events, tagged for recorded event streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    Created(QueryCreatedEvent),
    Split(SplitCompletedEvent),
    Completed(QueryCompletedEvent),
}

impl EngineEvent {
    pub fn query_id(&self) -> &str {
        match self {
            EngineEvent::Created(event) => &event.query_id,
            EngineEvent::Split(event) => &event.query_id,
            EngineEvent::Completed(event) => &event.query_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_completed_event() {
        let json = r#"{
            "event": "completed",
            "queryId": "20240517_0001",
            "queryState": "FAILED",
            "createTime": "2024-05-17T09:00:00Z",
            "executionStartTime": "2024-05-17T09:00:01Z",
            "endTime": "2024-05-17T09:00:04Z",
            "user": "bob",
            "failure": {
                "errorCode": { "code": 1, "name": "SYNTAX_ERROR", "type": "USER_ERROR" },
                "failureMessage": "line 1:1: mismatched input"
            }
        }"#;

        let event: EngineEvent = serde_json::from_str(json).unwrap();
        let EngineEvent::Completed(completed) = event else {
            panic!("expected a completed event");
        };
        assert_eq!(completed.query_id, "20240517_0001");
        assert!(completed.tags.is_empty());
        assert_eq!(completed.catalog, None);
        let failure = completed.failure.unwrap();
        assert_eq!(failure.error_code.error_type, ErrorType::UserError);
        assert_eq!(failure.failure_type, None);
    }

    #[test]
    fn test_parse_split_without_end_time() {
        let json = r#"{
            "event": "split",
            "queryId": "q",
            "stageId": "1",
            "taskId": "0",
            "createTime": "2024-05-17T09:00:00Z",
            "startTime": "2024-05-17T09:00:00.250Z"
        }"#;

        let event: EngineEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.query_id(), "q");
        let EngineEvent::Split(split) = event else {
            panic!("expected a split event");
        };
        assert!(split.start_time.is_some());
        assert!(split.end_time.is_none());
        assert!(split.failure.is_none());
    }
}
