#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, FallbackKind};
    use crate::events::EngineEvent;

    /// The shipped YAML config loads and validates
    #[test]
    fn test_listener_yaml_loading() {
        let config = load_and_validate_config("configs/listener.yaml").unwrap();

        assert_eq!(config.policy.log_query_created, Some(true));
        assert_eq!(config.policy.slack_query_created, Some(false));
        assert_eq!(config.policy.slack_query_failure, Some(true));
        assert_eq!(config.policy.log_split_complete, None);
        assert_eq!(config.alerts.channel, "#query-alerts");
        assert_eq!(config.fallback.kind, FallbackKind::Stderr);
    }

    /// The TOML flavour of the same settings
    #[test]
    fn test_listener_toml_loading() {
        let config = load_and_validate_config("configs/listener.toml").unwrap();

        assert_eq!(config.policy.log_query_created, Some(false));
        assert_eq!(config.policy.slack_query_success, Some(true));
        assert_eq!(config.alerts.channel, "#data-platform");
        assert!(config.alerts.enabled);
    }

    /// The sample event recording used by the replay binary parses
    #[test]
    fn test_sample_events_parse() {
        let content = std::fs::read_to_string("configs/events/sample.json").unwrap();
        let events: Vec<EngineEvent> = serde_json::from_str(&content).unwrap();

        assert_eq!(events.len(), 6);
        assert!(matches!(events[0], EngineEvent::Created(_)));
        assert!(matches!(events[2], EngineEvent::Split(ref split) if split.failure.is_some()));
        assert!(matches!(events[4], EngineEvent::Completed(ref done) if done.failure.is_some()));
    }
}
