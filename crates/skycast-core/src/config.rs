use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `weather.api_key`
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// OpenWeatherMap current-weather endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors joined into one line
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Temperature unit used for display.
///
/// Data is always fetched in Fahrenheit; this only changes presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl DisplayUnit {
    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    /// Single-letter suffix shown after the degree sign
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fahrenheit => "Fahrenheit",
            Self::Celsius => "Celsius",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-weather endpoint queried with `q`, `units` and `appid`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Provider API key. Overridden by `SKYCAST_API_KEY` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Unit shown when a session starts
    #[serde(default)]
    pub display_unit: DisplayUnit,

    /// Request timeout in seconds. Unset leaves the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            display_unit: DisplayUnit::default(),
            request_timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Configured timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// True when a non-blank API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Config {
    /// Load configuration from the default location, creating it if missing.
    /// `SKYCAST_API_KEY` is applied on top of the file.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;

            toml::from_str::<Config>(&contents)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            config
        };

        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Load configuration and validate it
    ///
    /// Uses `path` when given, otherwise the default location. Warnings are
    /// logged; errors fail the load.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Replace the API key with `key` when it is non-blank
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            tracing::debug!("Using API key from {}", API_KEY_ENV);
            self.weather.api_key = Some(key);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.weather.api_base_url,
            "weather.api_base_url",
            &mut result,
        );

        if !self.weather.has_api_key() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured - set {} or weather.api_key", API_KEY_ENV),
            );
        }

        if self.weather.request_timeout_secs == Some(0) {
            result.add_error(
                "weather.request_timeout_secs",
                "Timeout must be greater than 0",
            );
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// `<platform config dir>/skycast/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound("platform config directory".to_string()))?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed_config() -> Config {
        Config::default().with_api_key_override(Some("test-key".to_string()))
    }

    #[test]
    fn test_valid_default_config() {
        let result = keyed_config().validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let result = Config::default().validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = keyed_config();
        config.weather.api_base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.api_base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = keyed_config();
        config.weather.api_base_url = "ftp://example.com/weather".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = keyed_config();
        config.weather.request_timeout_secs = Some(0);
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "weather.request_timeout_secs"));
    }

    #[test]
    fn test_blank_override_keeps_file_key() {
        let mut config = Config::default();
        config.weather.api_key = Some("from-file".to_string());
        let config = config.with_api_key_override(Some("   ".to_string()));
        assert_eq!(config.weather.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_display_unit_toggle() {
        assert_eq!(DisplayUnit::Fahrenheit.toggled(), DisplayUnit::Celsius);
        assert_eq!(DisplayUnit::Celsius.toggled(), DisplayUnit::Fahrenheit);
        assert_eq!(DisplayUnit::Celsius.symbol(), "C");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[weather]\ndisplay_unit = \"celsius\"\n").unwrap();
        assert_eq!(config.weather.display_unit, DisplayUnit::Celsius);
        assert_eq!(config.weather.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.weather.request_timeout().is_none());
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
