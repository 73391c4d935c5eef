// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failure boundary around every listener entry point.
//!
//! The host's event loop must never be aborted by this crate, so both a
//! returned error and a panic inside `op` are absorbed here and reported to
//! the fallback channel. Reporting is itself guarded: if the first
//! diagnostic cannot be written, a shorter one is attempted and its outcome
//! is discarded.

use crate::observability::messages::dispatch::{EntryPointFailed, FallbackWriteFailed};
use crate::traits::FallbackChannel;
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// Run `op`, reporting any failure to `fallback` instead of propagating it.
///
/// # Example
/// ```
/// use query_herald::dispatch::isolate;
/// use query_herald::sinks::StderrFallback;
///
/// isolate("query_created", &StderrFallback, || -> Result<(), String> {
///     Err("sink unavailable".to_string())
/// });
/// // Still running: the failure went to stderr.
/// ```
pub fn isolate<F, E>(entry_point: &str, fallback: &dyn FallbackChannel, op: F)
where
    F: FnOnce() -> Result<(), E>,
    E: Display,
{
    let detail = match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(Ok(())) => return,
        Ok(Err(err)) => err.to_string(),
        Err(payload) => panic_detail(payload.as_ref()),
    };

    let primary = EntryPointFailed {
        entry_point,
        detail: &detail,
    }
    .to_string();
    let reported = panic::catch_unwind(AssertUnwindSafe(|| fallback.write(&primary)));
    if matches!(reported, Ok(Ok(()))) {
        return;
    }

    let secondary = FallbackWriteFailed { entry_point }.to_string();
    let _ = panic::catch_unwind(AssertUnwindSafe(|| fallback.write(&secondary)));
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked with a non-string payload".to_string()
    }
}
