// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Normalized query records shared by the event normalizer and the policy engine.

mod failure;
mod query;
pub mod resource;
mod time;

pub use failure::{FailureEnvelope, UNCATEGORIZED};
pub use query::{QueryInfo, QueryStage, SPLIT_STATE};
pub use resource::Resource;
pub use time::TimeEnvelope;
