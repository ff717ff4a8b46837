use std::env;

/// Prefix written in front of every diagnostic line.
pub const DEFAULT_TAG: &str = "[MOCK SERVER]";

pub(crate) const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub tag: String,
    pub format: LogFormat,
    pub filter: String,
}

impl TelemetryConfig {
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            tag: DEFAULT_TAG.to_string(),
            format: LogFormat::Text,
            filter: DEFAULT_FILTER.to_string(),
        }
    }

    /// Reads `RUST_LOG`, `LOG_FORMAT` and `MOCK_SERVER_TAG`, falling back to
    /// text lines at `info` tagged with [`DEFAULT_TAG`].
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(service_name, |key| env::var(key).ok())
    }

    fn from_lookup(service_name: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new(service_name);
        let filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.filter);
        let format = lookup("LOG_FORMAT")
            .map(|v| parse_format(&v))
            .unwrap_or(defaults.format);
        let tag = lookup("MOCK_SERVER_TAG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.tag);

        Self {
            service_name: defaults.service_name,
            tag,
            format,
            filter,
        }
    }
}

fn parse_format(value: &str) -> LogFormat {
    match value.trim().to_lowercase().as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> TelemetryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TelemetryConfig::from_lookup("mock-discord", |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_tagged_text_at_info() {
        let cfg = config_with(&[]);
        assert_eq!(cfg.service_name, "mock-discord");
        assert_eq!(cfg.tag, "[MOCK SERVER]");
        assert_eq!(cfg.format, LogFormat::Text);
        assert_eq!(cfg.filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_with(&[
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "JSON"),
            ("MOCK_SERVER_TAG", "[DISCORD]"),
        ]);
        assert_eq!(cfg.filter, "debug");
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.tag, "[DISCORD]");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let cfg = config_with(&[("RUST_LOG", " "), ("MOCK_SERVER_TAG", "")]);
        assert_eq!(cfg.filter, "info");
        assert_eq!(cfg.tag, DEFAULT_TAG);
    }

    #[test]
    fn unknown_format_is_text() {
        assert_eq!(parse_format("pretty"), LogFormat::Text);
        assert_eq!(parse_format(" json "), LogFormat::Json);
    }
}
