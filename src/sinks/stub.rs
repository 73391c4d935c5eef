// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SinkError;
use crate::policy::Severity;
use crate::traits::{Alert, AlertChannel, Emission, EventSink, FallbackChannel};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// An emission captured by [`RecordingSink`], with owned fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub query_id: String,
    pub user: Option<String>,
    pub severity: Severity,
    pub message: String,
    pub notify: Option<bool>,
}

/// A sink that records every emission for later inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Recorded>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<Recorded> {
        self.records.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, emission: &Emission<'_>) -> Result<(), SinkError> {
        self.records.lock().unwrap().push(Recorded {
            query_id: emission.query_id.to_string(),
            user: emission.user.map(String::from),
            severity: emission.severity,
            message: emission.message.to_string(),
            notify: emission.notify,
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A sink that always rejects, for error-path tests
pub struct FailingSink;

impl EventSink for FailingSink {
    fn emit(&self, emission: &Emission<'_>) -> Result<(), SinkError> {
        Err(SinkError::Rejected {
            query_id: emission.query_id.to_string(),
            reason: "simulated sink failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A sink that panics, standing in for a bug anywhere on the processing path
pub struct PanickingSink;

impl EventSink for PanickingSink {
    fn emit(&self, _emission: &Emission<'_>) -> Result<(), SinkError> {
        panic!("simulated sink panic")
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

/// Fallback channel that records lines and can fail its first N writes.
#[derive(Debug, Default)]
pub struct RecordingFallback {
    lines: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    fail_first: usize,
    panic_on_failure: bool,
}

impl RecordingFallback {
    /// Every write attempt up to `count` returns an I/O error.
    pub fn failing_first(count: usize) -> Self {
        Self {
            fail_first: count,
            ..Self::default()
        }
    }

    /// Every write attempt up to `count` panics.
    pub fn panicking_first(count: usize) -> Self {
        Self {
            fail_first: count,
            panic_on_failure: true,
            ..Self::default()
        }
    }

    /// Lines successfully written.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Write attempts, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl FallbackChannel for RecordingFallback {
    fn write(&self, line: &str) -> io::Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.fail_first {
            if self.panic_on_failure {
                panic!("simulated fallback panic");
            }
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated fallback failure"));
        }
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Alert channel that records delivered alerts
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    delivered: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn delivered(&self) -> Vec<Alert> {
        self.delivered.lock().unwrap().clone()
    }
}

impl AlertChannel for RecordingAlerts {
    fn deliver(&self, alert: &Alert) -> Result<(), SinkError> {
        self.delivered.lock().unwrap().push(alert.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
