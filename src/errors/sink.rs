// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by log sinks and alert channels.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("sink rejected record for query '{query_id}': {reason}")]
    Rejected { query_id: String, reason: String },

    #[error("alert delivery to '{channel}' failed: {reason}")]
    AlertDelivery { channel: String, reason: String },
}
