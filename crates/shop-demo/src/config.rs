//! # Demo Configuration
//!
//! Settings for the console walkthrough, loaded from the environment
//! (and a `.env` file when present).

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-field lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Pretty`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// `SHOP_LOG_FORMAT`
    pub log_format: LogFormat,
    /// `SHOP_BANNER`
    pub show_banner: bool,
}

impl DemoConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_format: lookup("SHOP_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            show_banner: lookup("SHOP_BANNER")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            show_banner: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_json_without_banner() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("SHOP_LOG_FORMAT", "JSON"),
            ("SHOP_BANNER", "off"),
        ]));

        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("SHOP_LOG_FORMAT", "xml"),
            ("SHOP_BANNER", "maybe"),
        ]));

        assert_eq!(config, DemoConfig::default());
    }
}
