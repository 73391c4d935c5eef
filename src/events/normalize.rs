// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Projection of the three engine event shapes onto [`QueryStage`].
//!
//! Every function here is total: any well-formed event yields a stage.

use crate::events::raw::{
    QueryCompletedEvent, QueryCreatedEvent, QueryFailureInfo, SplitCompletedEvent,
    SplitFailureInfo,
};
use crate::model::{FailureEnvelope, QueryInfo, QueryStage, Resource, TimeEnvelope, SPLIT_STATE};

pub fn from_created(event: &QueryCreatedEvent) -> QueryStage {
    QueryStage::Start(QueryInfo {
        id: event.query_id.clone(),
        state: event.query_state.clone(),
        time: TimeEnvelope::new(event.create_time, None, None),
        resource: Some(resource_for(
            event.catalog.as_deref(),
            event.schema.as_deref(),
        )),
        user: event.user.clone(),
        tags: event.tags.clone(),
        failure: None,
        query_type: event.query_type.clone(),
    })
}

pub fn from_split(event: &SplitCompletedEvent) -> QueryStage {
    QueryStage::Split {
        info: QueryInfo {
            id: event.query_id.clone(),
            state: SPLIT_STATE.to_string(),
            time: TimeEnvelope::new(event.create_time, event.start_time, event.end_time),
            resource: None,
            user: None,
            tags: Vec::new(),
            failure: event.failure.as_ref().map(split_failure),
            query_type: None,
        },
        stage_id: event.stage_id.clone(),
        task_id: event.task_id.clone(),
    }
}

pub fn from_completed(event: &QueryCompletedEvent) -> QueryStage {
    QueryStage::End(QueryInfo {
        id: event.query_id.clone(),
        state: event.query_state.clone(),
        time: TimeEnvelope::new(
            event.create_time,
            Some(event.execution_start_time),
            Some(event.end_time),
        ),
        resource: Some(resource_for(
            event.catalog.as_deref(),
            event.schema.as_deref(),
        )),
        user: event.user.clone(),
        tags: event.tags.clone(),
        failure: event.failure.as_ref().map(query_failure),
        query_type: event.query_type.clone(),
    })
}

/// Schema when both halves are known, catalog when only it is, otherwise unknown.
pub fn resource_for(catalog: Option<&str>, schema: Option<&str>) -> Resource {
    match (catalog, schema) {
        (Some(catalog), Some(schema)) => Resource::schema(schema, Resource::catalog(catalog)),
        (Some(catalog), None) => Resource::catalog(catalog),
        _ => Resource::Unknown,
    }
}

// Split failures are not classified by the engine; the category is left for
// rendering to default.
fn split_failure(failure: &SplitFailureInfo) -> FailureEnvelope {
    FailureEnvelope::uncategorized(
        failure.failure_type.clone(),
        Some(failure.failure_message.clone()),
    )
}

fn query_failure(failure: &QueryFailureInfo) -> FailureEnvelope {
    FailureEnvelope::categorized(
        failure.error_code.name.clone(),
        failure.failure_message.clone(),
        failure.error_code.error_type.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::raw::{ErrorCode, ErrorType};
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use std::time::Duration;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0).unwrap()
    }

    fn created(catalog: Option<&str>, schema: Option<&str>) -> QueryCreatedEvent {
        QueryCreatedEvent {
            query_id: "q1".into(),
            query_state: "QUEUED".into(),
            create_time: t0(),
            query_type: Some("SELECT".into()),
            catalog: catalog.map(String::from),
            schema: schema.map(String::from),
            user: Some("alice".into()),
            tags: vec!["etl".into(), "nightly".into()],
        }
    }

    fn completed(failure: Option<QueryFailureInfo>) -> QueryCompletedEvent {
        QueryCompletedEvent {
            query_id: "q2".into(),
            query_state: "FINISHED".into(),
            create_time: t0(),
            execution_start_time: t0() + TimeDelta::seconds(1),
            end_time: t0() + TimeDelta::seconds(11),
            query_type: None,
            catalog: Some("sales".into()),
            schema: Some("orders".into()),
            user: Some("bob".into()),
            tags: vec![],
            failure,
        }
    }

    #[test]
    fn test_resource_derivation() {
        assert_eq!(
            resource_for(Some("sales"), Some("orders")),
            Resource::schema("orders", Resource::catalog("sales"))
        );
        assert_eq!(resource_for(Some("sales"), None), Resource::catalog("sales"));
        assert_eq!(resource_for(None, None), Resource::Unknown);
        // A schema without its catalog cannot be addressed.
        assert_eq!(resource_for(None, Some("orders")), Resource::Unknown);
    }

    #[test]
    fn test_created_copies_fields_verbatim() {
        let stage = from_created(&created(Some("sales"), None));
        let QueryStage::Start(info) = &stage else {
            panic!("expected start stage");
        };
        assert_eq!(info.id, "q1");
        assert_eq!(info.state, "QUEUED");
        assert_eq!(info.query_type.as_deref(), Some("SELECT"));
        assert_eq!(info.user.as_deref(), Some("alice"));
        assert_eq!(info.tags, vec!["etl", "nightly"]);
        assert_eq!(info.resource, Some(Resource::catalog("sales")));
        assert_eq!(info.time.started, None);
        assert_eq!(info.time.ended, None);
        assert!(!info.failed());
    }

    #[test]
    fn test_split_is_always_running_and_uncategorized() {
        let event = SplitCompletedEvent {
            query_id: "q3".into(),
            stage_id: "2".into(),
            task_id: "7".into(),
            create_time: t0(),
            start_time: Some(t0() + TimeDelta::seconds(1)),
            end_time: Some(t0() + TimeDelta::seconds(4)),
            failure: Some(SplitFailureInfo {
                failure_type: "java.io.IOException".into(),
                failure_message: "connection reset".into(),
            }),
        };

        let stage = from_split(&event);
        let QueryStage::Split { info, stage_id, task_id } = &stage else {
            panic!("expected split stage");
        };
        assert_eq!(info.state, "RUNNING");
        assert_eq!((stage_id.as_str(), task_id.as_str()), ("2", "7"));
        assert_eq!(info.time.run_duration(), Duration::from_secs(3));
        assert!(info.failed());
        let failure = info.failure.as_ref().unwrap();
        assert_eq!(failure.category, None);
        assert_eq!(failure.code, "java.io.IOException");
        assert_eq!(failure.message.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_split_in_flight_without_failure() {
        let event = SplitCompletedEvent {
            query_id: "q3".into(),
            stage_id: "0".into(),
            task_id: "0".into(),
            create_time: t0(),
            start_time: None,
            end_time: None,
            failure: None,
        };
        let stage = from_split(&event);
        assert!(!stage.info().failed());
        assert_eq!(stage.info().time.run_duration(), Duration::ZERO);
    }

    #[test]
    fn test_completed_success() {
        let stage = from_completed(&completed(None));
        let QueryStage::End(info) = &stage else {
            panic!("expected end stage");
        };
        assert_eq!(info.state, "FINISHED");
        assert_eq!(
            info.resource,
            Some(Resource::schema("orders", Resource::catalog("sales")))
        );
        assert_eq!(info.user.as_deref(), Some("bob"));
        assert_eq!(info.failure, None);
        assert_eq!(info.time.total_duration(), Duration::from_secs(11));
        assert_eq!(info.time.wait_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_completed_failure_carries_category() {
        let stage = from_completed(&completed(Some(QueryFailureInfo {
            error_code: ErrorCode {
                code: 131_079,
                name: "EXCEEDED_TIME_LIMIT".into(),
                error_type: ErrorType::InsufficientResources,
            },
            failure_type: Some("io.trino.spi.TrinoException".into()),
            failure_message: Some("Query exceeded maximum time limit".into()),
        })));

        let info = stage.info();
        assert!(info.failed());
        assert_eq!(
            info.failure,
            Some(FailureEnvelope::categorized(
                "EXCEEDED_TIME_LIMIT",
                Some("Query exceeded maximum time limit".into()),
                "INSUFFICIENT_RESOURCES",
            ))
        );
    }
}
