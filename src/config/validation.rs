//! Configuration validation.
//!
//! Deserialization already enforces the shape of every section; validation
//! catches settings that parse but that the listener cannot be built from:
//!
//! 1. **Fallback target**: a `file` fallback must name a path
//! 2. **Alert channel**: enabled alerts need a non-blank channel name
//!
//! Every problem is collected so one run reports all of them.
//!
//! # Example
//! ```rust
//! use query_herald::config::{validate_config, Config};
//!
//! let config = Config::default();
//! assert!(validate_config(&config).is_ok());
//! ```

use crate::config::{Config, FallbackKind};

/// Validate a loaded configuration, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if config.fallback.kind == FallbackKind::File && config.fallback.path.is_none() {
        problems.push("fallback.path is required when fallback.kind is 'file'".to_string());
    }

    if config.alerts.enabled && config.alerts.channel.trim().is_empty() {
        problems.push("alerts.channel must not be blank while alerts are enabled".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
