use common::DashboardConfig;
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "coastwatch_";

/// `localStorage` key for a setting
fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// API location, data source and component tuning
    pub config: DashboardConfig,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            config: DashboardConfig::default(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Overrides stored as `coastwatch_<key>` in localStorage
            if let Ok(Some(storage)) = window.local_storage() {
                for key in DashboardConfig::KEYS {
                    if let Ok(Some(value)) = storage.get_item(&storage_key(key)) {
                        // invalid values are reported and skipped by the config itself
                        let _ = settings.config.apply_override(key, &value);
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item(&storage_key("log_level")) {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(duration)) = storage.get_item(&storage_key("toast_duration_ms")) {
                    if let Ok(ms) = duration.parse::<u32>() {
                        settings.toast_duration_ms = ms;
                    }
                }
            }
        }

        settings
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        self.config.api_url(endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_share_prefix() {
        assert_eq!(storage_key("log_level"), "coastwatch_log_level");
        assert_eq!(storage_key("toast_duration_ms"), "coastwatch_toast_duration_ms");
        for key in DashboardConfig::KEYS {
            assert!(storage_key(key).starts_with(STORAGE_PREFIX));
        }
    }
}
