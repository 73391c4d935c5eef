// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::FallbackChannel;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writes fallback diagnostics straight to the process's stderr.
#[derive(Debug, Default)]
pub struct StderrFallback;

impl FallbackChannel for StderrFallback {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line)
    }
}

/// Appends fallback diagnostics to a file, one line per write.
#[derive(Debug)]
pub struct FileFallback {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileFallback {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FallbackChannel for FileFallback {
    fn write(&self, line: &str) -> io::Result<()> {
        // A writer that panicked mid-line leaves the file usable.
        let mut file = self
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(file, "{}", line)?;
        file.flush()
    }
}
