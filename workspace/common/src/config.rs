use tracing::warn;

use crate::preview::PreviewLimit;
use crate::source::DataSourceKind;
use crate::submission::DEFAULT_INDICATOR_DURATION_MS;

/// Dashboard configuration shared by every component
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend API host (e.g., "localhost")
    pub api_host: String,

    /// Backend API port
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Backend API or built-in sample data
    pub data_source: DataSourceKind,

    /// Files previewed per selection
    pub preview_limit: PreviewLimit,

    /// How long the submission result stays on screen
    pub indicator_duration_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8080,
            api_path: "/api".to_string(),
            api_use_https: false,
            data_source: DataSourceKind::Backend,
            preview_limit: PreviewLimit::default(),
            indicator_duration_ms: DEFAULT_INDICATOR_DURATION_MS,
        }
    }
}

impl DashboardConfig {
    /// Keys accepted by `apply_override`
    pub const KEYS: [&'static str; 7] = [
        "api_host",
        "api_port",
        "api_path",
        "api_use_https",
        "data_source",
        "preview_limit",
        "indicator_duration_ms",
    ];

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    /// Applies one string override. Invalid values leave the field unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), String> {
        let result = match key {
            "api_host" => {
                self.api_host = value.to_string();
                Ok(())
            }
            "api_port" => value
                .parse::<u16>()
                .map(|port| self.api_port = port)
                .map_err(|e| e.to_string()),
            "api_path" => {
                self.api_path = value.to_string();
                Ok(())
            }
            "api_use_https" => {
                self.api_use_https = value.eq_ignore_ascii_case("true");
                Ok(())
            }
            "data_source" => value.parse().map(|kind| self.data_source = kind),
            "preview_limit" => value.parse().map(|limit| self.preview_limit = limit),
            "indicator_duration_ms" => value
                .parse::<u32>()
                .map(|ms| self.indicator_duration_ms = ms)
                .map_err(|e| e.to_string()),
            other => Err(format!("Unknown setting: {}", other)),
        };
        if let Err(err) = &result {
            warn!(key, value, %err, "Ignoring invalid setting");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_url("/reports"), "http://localhost:8080/api/reports");
        assert_eq!(config.preview_limit, PreviewLimit::Capped(5));
        assert_eq!(config.indicator_duration_ms, 3000);
    }

    #[test]
    fn test_overrides() {
        let mut config = DashboardConfig::default();
        config.apply_override("api_host", "hazards.example.org").unwrap();
        config.apply_override("api_port", "443").unwrap();
        config.apply_override("api_use_https", "TRUE").unwrap();
        config.apply_override("data_source", "sample").unwrap();
        config.apply_override("preview_limit", "unlimited").unwrap();

        assert_eq!(config.api_base_url(), "https://hazards.example.org:443/api");
        assert_eq!(config.data_source, DataSourceKind::Sample);
        assert_eq!(config.preview_limit, PreviewLimit::Unlimited);
    }

    #[test]
    fn test_invalid_override_keeps_value() {
        let mut config = DashboardConfig::default();
        assert!(config.apply_override("api_port", "eighty").is_err());
        assert!(config.apply_override("theme", "dark").is_err());
        assert_eq!(config, DashboardConfig::default());
    }
}
