// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;

/// Low-level channel for emergency diagnostics, bypassing the structured logger.
///
/// Implementations report failure through the returned `Result` rather than
/// panicking; the dispatcher still guards against both.
pub trait FallbackChannel: Send + Sync {
    fn write(&self, line: &str) -> io::Result<()>;
}

impl<T: FallbackChannel + ?Sized> FallbackChannel for std::sync::Arc<T> {
    fn write(&self, line: &str) -> io::Result<()> {
        (**self).write(line)
    }
}
