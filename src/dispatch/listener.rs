// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Config, FallbackKind};
use crate::dispatch::isolate;
use crate::errors::{ConfigError, SinkError};
use crate::events::{
    normalize, EngineEvent, QueryCompletedEvent, QueryCreatedEvent, SplitCompletedEvent,
};
use crate::model::QueryStage;
use crate::observability::messages::listener::{ListenerStarted, StageSuppressed};
use crate::observability::messages::StructuredLog;
use crate::policy::{self, Decision};
use crate::sinks::{FileFallback, LogAlertChannel, StderrFallback, TracingSink};
use crate::traits::{Emission, EventSink, FallbackChannel, PolicyProvider};

/// Entry points the host engine calls for each query lifecycle event.
///
/// Each entry point normalizes the event, evaluates the policy against the
/// current snapshot and hands the result to the sink. None of them ever
/// fails or panics towards the caller; see [`isolate`].
///
/// The listener holds no mutable state of its own and is `Send + Sync`, so a
/// single instance behind an `Arc` can serve every engine thread.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use query_herald::config::PolicyConfig;
/// use query_herald::dispatch::QueryListener;
/// use query_herald::events::QueryCreatedEvent;
/// use query_herald::sinks::{StderrFallback, TracingSink};
///
/// let listener = QueryListener::new(TracingSink::new(), StderrFallback, PolicyConfig::default());
///
/// listener.query_created(&QueryCreatedEvent {
///     query_id: "20240517_090000_00001".into(),
///     query_state: "QUEUED".into(),
///     create_time: Utc::now(),
///     query_type: Some("SELECT".into()),
///     catalog: Some("hive".into()),
///     schema: Some("web".into()),
///     user: Some("alice".into()),
///     tags: vec![],
/// });
/// ```
pub struct QueryListener {
    sink: Box<dyn EventSink>,
    fallback: Box<dyn FallbackChannel>,
    policy: Box<dyn PolicyProvider>,
}

impl QueryListener {
    pub fn new(
        sink: impl EventSink + 'static,
        fallback: impl FallbackChannel + 'static,
        policy: impl PolicyProvider + 'static,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            fallback: Box::new(fallback),
            policy: Box::new(policy),
        }
    }

    /// Build the default listener described by `cfg`: a [`TracingSink`]
    /// (with a [`LogAlertChannel`] unless alerts are disabled) and the
    /// configured fallback channel.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let sink = if cfg.alerts.enabled {
            TracingSink::with_alerts(Box::new(LogAlertChannel::new(cfg.alerts.channel.clone())))
        } else {
            TracingSink::new()
        };

        let (fallback, fallback_name): (Box<dyn FallbackChannel>, String) =
            match cfg.fallback.kind {
                FallbackKind::Stderr => (
                    Box::new(StderrFallback) as Box<dyn FallbackChannel>,
                    "stderr".to_string(),
                ),
                FallbackKind::File => {
                    let path = cfg.fallback.path.as_ref().ok_or_else(|| ConfigError::Invalid {
                        problems: vec![
                            "fallback.path is required when fallback.kind is 'file'".to_string(),
                        ],
                    })?;
                    let file = FileFallback::open(path).map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    (Box::new(file) as Box<dyn FallbackChannel>, path.display().to_string())
                }
            };

        ListenerStarted {
            sink: sink.name(),
            alert_channel: sink.alert_channel(),
            fallback: &fallback_name,
        }
        .log();

        Ok(Self {
            sink: Box::new(sink),
            fallback,
            policy: Box::new(cfg.policy),
        })
    }

    pub fn query_created(&self, event: &QueryCreatedEvent) {
        self.dispatch("query_created", || normalize::from_created(event));
    }

    pub fn split_completed(&self, event: &SplitCompletedEvent) {
        self.dispatch("split_completed", || normalize::from_split(event));
    }

    pub fn query_completed(&self, event: &QueryCompletedEvent) {
        self.dispatch("query_completed", || normalize::from_completed(event));
    }

    /// Route a tagged event to its entry point.
    pub fn handle(&self, event: &EngineEvent) {
        match event {
            EngineEvent::Created(event) => self.query_created(event),
            EngineEvent::Split(event) => self.split_completed(event),
            EngineEvent::Completed(event) => self.query_completed(event),
        }
    }

    fn dispatch(&self, entry_point: &str, to_stage: impl FnOnce() -> QueryStage) {
        isolate(entry_point, self.fallback.as_ref(), || {
            let stage = to_stage();
            let decision = policy::evaluate(&stage, &self.policy.policy());
            self.emit(&stage, &decision)
        });
    }

    fn emit(&self, stage: &QueryStage, decision: &Decision) -> Result<(), SinkError> {
        let info = stage.info();
        let Some(message) = decision.message.as_deref() else {
            StageSuppressed {
                query_id: &info.id,
                stage: stage.name(),
            }
            .log();
            return Ok(());
        };

        self.sink.emit(&Emission {
            query_id: &info.id,
            user: info.user.as_deref(),
            severity: decision.severity,
            message,
            notify: decision.notify,
        })
    }
}
