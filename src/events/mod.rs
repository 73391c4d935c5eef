// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod normalize;
pub mod raw;

pub use normalize::{from_completed, from_created, from_split};
pub use raw::{
    EngineEvent, ErrorCode, ErrorType, QueryCompletedEvent, QueryCreatedEvent, QueryFailureInfo,
    SplitCompletedEvent, SplitFailureInfo,
};
