/// Alert channel name used when the config does not set one.
pub const DEFAULT_ALERT_CHANNEL: &str = "#query-alerts";
/// Scoping key for records whose query has no authenticated user.
pub const UNKNOWN_USER: &str = "unknown";
/// Tracing target alerts are logged on.
pub const ALERT_TARGET: &str = "query_herald::alerts";
