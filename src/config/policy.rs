// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// Tri-state switches read by the policy engine.
///
/// `None` means "use the default" (enabled, no routing override),
/// `Some(false)` suppresses and `Some(true)` forces. The `log_*` switches
/// gate whether a message is produced at all; the `slack_*` switches are
/// passed through as the notification override for the matching stage.
///
/// # Example
/// ```yaml
/// policy:
///   log_query_created: false
///   slack_query_failure: true
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub log_query_created: Option<bool>,
    pub log_query_success: Option<bool>,
    pub log_query_failure: Option<bool>,
    pub log_split_complete: Option<bool>,
    pub slack_query_created: Option<bool>,
    pub slack_split_complete: Option<bool>,
    pub slack_query_success: Option<bool>,
    pub slack_query_failure: Option<bool>,
}

/// Whether a gate lets a message through. Only an explicit `false` closes it.
pub fn gate_open(gate: Option<bool>) -> bool {
    gate != Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_open() {
        assert!(gate_open(None));
        assert!(gate_open(Some(true)));
        assert!(!gate_open(Some(false)));
    }

    #[test]
    fn test_partial_policy_leaves_rest_absent() {
        let policy: PolicyConfig = serde_yaml::from_str("log_query_created: false\n").unwrap();
        assert_eq!(policy.log_query_created, Some(false));
        assert_eq!(policy.slack_query_created, None);
        assert_eq!(policy.log_query_failure, None);
    }

    #[test]
    fn test_unknown_switch_is_rejected() {
        let result: Result<PolicyConfig, _> = serde_yaml::from_str("log_query_finished: true\n");
        assert!(result.is_err());
    }
}
