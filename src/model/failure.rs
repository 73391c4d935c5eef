// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

/// Category rendered for failures the engine did not classify.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Engine-reported failure, normalized from either a split or a query failure.
///
/// Split failures never carry a category; query failures always do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEnvelope {
    pub code: String,
    pub message: Option<String>,
    pub category: Option<String>,
}

impl FailureEnvelope {
    pub fn uncategorized(code: impl Into<String>, message: Option<String>) -> Self {
        Self {
            code: code.into(),
            message,
            category: None,
        }
    }

    pub fn categorized(
        code: impl Into<String>,
        message: Option<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message,
            category: Some(category.into()),
        }
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// `<category>:<code>`, with the category defaulted when absent.
    pub fn qualified_code(&self) -> String {
        format!("{}:{}", self.category_or_default(), self.code)
    }
}

impl Display for FailureEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.qualified_code(), self.message_or_empty())
    }
}
