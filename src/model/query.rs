// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{FailureEnvelope, Resource, TimeEnvelope};

/// State reported for every split, since splits do not carry engine state.
pub const SPLIT_STATE: &str = "RUNNING";

/// Unified record describing a query at one point in its life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInfo {
    pub id: String,
    pub state: String,
    pub time: TimeEnvelope,
    pub resource: Option<Resource>,
    pub user: Option<String>,
    pub tags: Vec<String>,
    pub failure: Option<FailureEnvelope>,
    pub query_type: Option<String>,
}

impl QueryInfo {
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// The point in a query's life an event was observed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStage {
    Start(QueryInfo),
    Split {
        info: QueryInfo,
        stage_id: String,
        task_id: String,
    },
    End(QueryInfo),
}

impl QueryStage {
    pub fn info(&self) -> &QueryInfo {
        match self {
            QueryStage::Start(info) | QueryStage::End(info) => info,
            QueryStage::Split { info, .. } => info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryStage::Start(_) => "start",
            QueryStage::Split { .. } => "split",
            QueryStage::End(_) => "end",
        }
    }
}
