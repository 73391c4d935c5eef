// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fault-isolating dispatch of engine events through normalization, policy
//! evaluation and the sink.

mod isolate;
mod listener;


pub use isolate::isolate;
pub use listener::QueryListener;
