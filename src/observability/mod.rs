// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation, so no log wording is scattered through the code and every
//! line the listener writes can be found by type name.
//!
//! # Usage
//!
//! ```rust
//! use query_herald::observability::messages::dispatch::EntryPointFailed;
//!
//! let msg = EntryPointFailed {
//!     entry_point: "split_completed",
//!     detail: "sink unavailable",
//! };
//!
//! eprintln!("{}", msg);
//! ```

pub mod messages;
