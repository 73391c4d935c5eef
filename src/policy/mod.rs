// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Logging policy engine.
//!
//! Given a normalized [`QueryStage`](crate::model::QueryStage) and a
//! [`PolicyConfig`](crate::config::PolicyConfig) snapshot, decides the
//! severity, the message (or suppression) and the notification override.
//! Evaluation is a pure function; it never logs by itself.

mod decision;
pub mod rules;

pub use decision::{Decision, Severity};
pub use rules::{evaluate, evaluate_with_rule, Rule, RULES};
