// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // listener config + policy switches
pub mod dispatch;      // fault-isolating entry points
pub mod errors;        // error handling
pub mod events;        // raw engine events + normalization
pub mod model;         // normalized query records
pub mod observability;
pub mod policy;        // logging policy engine
pub mod sinks;         // default collaborators
pub mod traits;        // collaborator seams
pub mod utils;
