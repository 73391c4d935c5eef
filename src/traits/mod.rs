// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seams between the listener core and its injected collaborators.

pub mod alert;
pub mod fallback;
pub mod policy;
pub mod sink;

pub use alert::{Alert, AlertChannel};
pub use fallback::FallbackChannel;
pub use policy::{PolicyProvider, SharedPolicy};
pub use sink::{Emission, EventSink};
