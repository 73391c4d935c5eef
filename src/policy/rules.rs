// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered decision table mapping a stage's shape to a [`Decision`].
//!
//! Rules are tried in [`RULES`] order and the first one that recognizes the
//! stage wins. The shapes are mutually exclusive, except for the final
//! `unrecognized` rule which accepts anything:
//!
//! | Rule              | Shape                                   | Severity | Gate                 | Notify override        |
//! |-------------------|-----------------------------------------|----------|----------------------|------------------------|
//! | `query_created`   | Start with resource and user            | info     | `log_query_created`  | `slack_query_created`  |
//! | `split_completed` | Split without failure                   | info     | none                 | `slack_split_complete` |
//! | `split_failed`    | Split with failure                      | info     | none                 | `slack_split_complete` |
//! | `query_succeeded` | End with resource and user, no failure  | info     | `log_query_success`  | `slack_query_success`  |
//! | `query_failed`    | End with resource and user, failure     | warn     | `log_query_failure`  | `slack_query_failure`  |
//! | `unrecognized`    | anything else                           | warn     | none                 | none                   |

use crate::config::{gate_open, PolicyConfig};
use crate::model::{QueryInfo, QueryStage, Resource};
use crate::observability::messages::query::{
    QueryFailed, QuerySubmitted, QuerySucceeded, SplitFinished, UnrecognizedStage,
};
use crate::policy::{Decision, Severity};

/// One row of the decision table. `apply` returns `None` when the stage does
/// not have the shape this rule handles.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&QueryStage, &PolicyConfig) -> Option<Decision>,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "query_created",
        apply: query_created,
    },
    Rule {
        name: "split_completed",
        apply: split_completed,
    },
    Rule {
        name: "split_failed",
        apply: split_failed,
    },
    Rule {
        name: "query_succeeded",
        apply: query_succeeded,
    },
    Rule {
        name: "query_failed",
        apply: query_failed,
    },
    Rule {
        name: "unrecognized",
        apply: unrecognized,
    },
];

/// Decide how a stage is logged and routed.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use query_herald::config::PolicyConfig;
/// use query_herald::model::{QueryInfo, QueryStage, Resource, TimeEnvelope};
/// use query_herald::policy::{evaluate, Severity};
///
/// let stage = QueryStage::Start(QueryInfo {
///     id: "q1".into(),
///     state: "QUEUED".into(),
///     time: TimeEnvelope::new(Utc::now(), None, None),
///     resource: Some(Resource::catalog("hive")),
///     user: Some("alice".into()),
///     tags: vec![],
///     failure: None,
///     query_type: None,
/// });
///
/// let decision = evaluate(&stage, &PolicyConfig::default());
/// assert_eq!(decision.severity, Severity::Info);
/// assert!(decision.message.unwrap().contains("submitted by `alice` against `hive`"));
/// ```
pub fn evaluate(stage: &QueryStage, policy: &PolicyConfig) -> Decision {
    evaluate_with_rule(stage, policy).1
}

/// Like [`evaluate`], also naming the rule that matched.
pub fn evaluate_with_rule(stage: &QueryStage, policy: &PolicyConfig) -> (&'static str, Decision) {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(stage, policy).map(|decision| (rule.name, decision)))
        .unwrap_or_else(|| ("unrecognized", unrecognized_decision(stage)))
}

fn gated(
    gate: Option<bool>,
    severity: Severity,
    notify: Option<bool>,
    render: impl FnOnce() -> String,
) -> Decision {
    if gate_open(gate) {
        Decision::emit(severity, render(), notify)
    } else {
        Decision::suppressed(severity, notify)
    }
}

/// Resource and user, when both are present.
fn attributed(info: &QueryInfo) -> Option<(&Resource, &str)> {
    Some((info.resource.as_ref()?, info.user.as_deref()?))
}

fn query_created(stage: &QueryStage, policy: &PolicyConfig) -> Option<Decision> {
    let QueryStage::Start(info) = stage else {
        return None;
    };
    let (resource, user) = attributed(info)?;
    Some(gated(
        policy.log_query_created,
        Severity::Info,
        policy.slack_query_created,
        || {
            QuerySubmitted {
                info,
                user,
                resource,
            }
            .to_string()
        },
    ))
}

fn split_completed(stage: &QueryStage, policy: &PolicyConfig) -> Option<Decision> {
    match stage {
        QueryStage::Split {
            info,
            stage_id,
            task_id,
        } if !info.failed() => Some(split_decision(info, stage_id, task_id, policy)),
        _ => None,
    }
}

fn split_failed(stage: &QueryStage, policy: &PolicyConfig) -> Option<Decision> {
    match stage {
        QueryStage::Split {
            info,
            stage_id,
            task_id,
        } if info.failed() => Some(split_decision(info, stage_id, task_id, policy)),
        _ => None,
    }
}

// Splits are always logged; log_split_complete does not gate them.
fn split_decision(
    info: &QueryInfo,
    stage_id: &str,
    task_id: &str,
    policy: &PolicyConfig,
) -> Decision {
    let message = SplitFinished {
        info,
        stage_id,
        task_id,
    };
    Decision::emit(
        Severity::Info,
        message.to_string(),
        policy.slack_split_complete,
    )
}

fn query_succeeded(stage: &QueryStage, policy: &PolicyConfig) -> Option<Decision> {
    let QueryStage::End(info) = stage else {
        return None;
    };
    if info.failed() {
        return None;
    }
    let (resource, user) = attributed(info)?;
    Some(gated(
        policy.log_query_success,
        Severity::Info,
        policy.slack_query_success,
        || {
            QuerySucceeded {
                info,
                user,
                resource,
            }
            .to_string()
        },
    ))
}

fn query_failed(stage: &QueryStage, policy: &PolicyConfig) -> Option<Decision> {
    let QueryStage::End(info) = stage else {
        return None;
    };
    let failure = info.failure.as_ref()?;
    let (resource, user) = attributed(info)?;
    Some(gated(
        policy.log_query_failure,
        Severity::Warn,
        policy.slack_query_failure,
        || {
            QueryFailed {
                info,
                user,
                resource,
                failure,
            }
            .to_string()
        },
    ))
}

fn unrecognized(stage: &QueryStage, _policy: &PolicyConfig) -> Option<Decision> {
    Some(unrecognized_decision(stage))
}

fn unrecognized_decision(stage: &QueryStage) -> Decision {
    Decision::emit(
        Severity::Warn,
        UnrecognizedStage { stage }.to_string(),
        None,
    )
}
