//! Client configuration management
//!
//! Configuration is an explicit value handed to the client at construction.
//! It can be built in code, loaded from a TOML file, or assembled from the
//! environment (with `.env` support), where environment variables override
//! whatever the file provided.

use crate::core::constants::{DEFAULT_BASE_URL, env};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Default configuration file looked up by `Config::from_env`
const DEFAULT_CONFIG_FILE: &str = "eligible.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub test_mode: bool,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            test_mode: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestSection {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for RequestSection {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub request: RequestSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Eligible client configuration
///
/// Built once and shared by reference with every client created from it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Eligible API key; requests fail with an authentication error without it
    pub api_key: Option<String>,

    /// API base URL, without a trailing slash
    pub base_url: String,

    /// Send `test=true` with every request (Eligible sandbox)
    pub test_mode: bool,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Logging level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl Config {
    /// Create a configuration with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    fn from_toml(config: TomlConfig) -> Self {
        Config {
            api_key: config.api_key,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            test_mode: config.api.test_mode,
            request_timeout: config.request.request_timeout,
            log_level: config.logging.log_level,
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if
    /// `request_timeout` is zero.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        let config = Self::from_toml(config);
        config
            .validate_request_timeout()
            .context("Invalid [request] section")?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads `.env` if present, then the TOML file named by
    /// `ELIGIBLE_CONFIG_PATH` (default `eligible.toml`, skipped when missing),
    /// then applies `ELIGIBLE_*` overrides.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let explicit_path = std::env::var(env::CONFIG_PATH).ok();
        let config_path = explicit_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if explicit_path.is_some() || Path::new(&config_path).exists() {
            Self::from_file(&config_path)
                .with_context(|| format!("Failed to load configuration from {}", config_path))?
        } else {
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `ELIGIBLE_*` overrides using the given variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(env::API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = lookup(env::BASE_URL) {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(test_mode) = lookup(env::TEST_MODE) {
            self.test_mode = matches!(
                test_mode.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Some(timeout) = lookup(env::REQUEST_TIMEOUT) {
            self.request_timeout = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {}", env::REQUEST_TIMEOUT, timeout))?;
            self.validate_request_timeout()
                .with_context(|| format!("Invalid {} value: {}", env::REQUEST_TIMEOUT, timeout))?;
        }
        if let Some(log_level) = lookup(env::LOG_LEVEL) {
            self.log_level = log_level;
        }
        Ok(())
    }

    /// The configured API key, if it is present and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// A zero timeout would make every request expire immediately
    fn validate_request_timeout(&self) -> Result<()> {
        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be at least 1 second");
        }
        Ok(())
    }

    /// Check that a usable API key is configured
    pub fn validate_api_key(&self) -> bool {
        self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            api_key = "test-key"

            [api]
            base_url = "https://sandbox.example.org/"
            test_mode = true

            [request]
            request_timeout = 12

            [logging]
            log_level = "debug"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_key(), Some("test-key"));
        assert_eq!(config.base_url, "https://sandbox.example.org");
        assert!(config.test_mode);
        assert_eq!(config.request_timeout, 12);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.test_mode);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "api_key = ").unwrap();
        file.flush().unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert!(Config::new("TEST").validate_api_key());
        assert!(!Config::default().validate_api_key());
        assert!(!Config::new("   ").validate_api_key());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (env::API_KEY, "from-env"),
            (env::BASE_URL, "http://localhost:9000/"),
            (env::TEST_MODE, "yes"),
            (env::REQUEST_TIMEOUT, "5"),
        ]);
        let mut config = Config::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_key(), Some("from-env"));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert!(config.test_mode);
        assert_eq!(config.request_timeout, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_timeout_in_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[request]\nrequest_timeout = 0\n").unwrap();
        file.flush().unwrap();

        let error = Config::from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", error).contains("request_timeout must be at least 1 second"));
    }

    #[test]
    fn test_zero_timeout_override_is_rejected() {
        let mut config = Config::default();
        let result = config
            .apply_overrides(|name| (name == env::REQUEST_TIMEOUT).then(|| "0".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_rejects_bad_timeout() {
        let mut config = Config::default();
        let result = config.apply_overrides(|name| {
            (name == env::REQUEST_TIMEOUT).then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }
}
