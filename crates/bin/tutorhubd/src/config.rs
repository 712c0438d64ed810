//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tutorhub.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Backend API settings.
    pub backend: BackendConfig,
    /// Local storage settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Backend API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every API path is appended to.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the session.
    pub path: PathBuf,
}

/// Logging configuration.
///
/// `TUTORHUB_LOG` overrides `RUST_LOG`, which overrides the file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tutorhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tutorhub.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("TUTORHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("TUTORHUB_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("TUTORHUB_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("TUTORHUB_BACKEND_URL") {
            self.backend.url = val;
        }
        if let Some(val) = var("TUTORHUB_STORAGE_PATH") {
            self.storage.path = PathBuf::from(val);
        }
        // The app-specific variable wins over the generic one.
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("TUTORHUB_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let url = url::Url::parse(&self.backend.url).map_err(|err| {
            ConfigError::Validation(format!("backend url {:?}: {err}", self.backend.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "backend url must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "storage path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tutorhub-session.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tutorhubd=info,tutorhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.url, "http://127.0.0.1:8000");
        assert_eq!(config.storage.path, PathBuf::from("tutorhub-session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [backend]
            url = 'https://api.tutorhub.pk/v1'

            [storage]
            path = '/var/lib/tutorhub/session.json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.backend.url, "https://api.tutorhub.pk/v1");
        assert_eq!(
            config.storage.path,
            PathBuf::from("/var/lib/tutorhub/session.json")
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_defaults_for_missing_sections_when_toml_partial() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.backend.url, "http://127.0.0.1:8000");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_when_toml_invalid() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_override_from_env_when_variables_set() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("TUTORHUB_HOST", "10.0.0.1"),
            ("TUTORHUB_PORT", "4000"),
            ("TUTORHUB_BACKEND_URL", "http://backend:8000"),
            ("TUTORHUB_STORAGE_PATH", "/tmp/session.json"),
            ("TUTORHUB_LOG", "warn"),
        ]));
        assert_eq!(config.bind_addr(), "10.0.0.1:4000");
        assert_eq!(config.backend.url, "http://backend:8000");
        assert_eq!(config.storage.path, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port_when_both_set() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("TUTORHUB_HOST", "10.0.0.1"),
            ("TUTORHUB_PORT", "4000"),
            ("TUTORHUB_BIND", "127.0.0.1:5000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn should_prefer_tutorhub_log_when_both_filters_set() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("TUTORHUB_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_use_rust_log_when_tutorhub_log_unset() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("TUTORHUB_PORT", "http")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_backend_url_when_not_http() {
        let mut config = Config::default();
        config.backend.url = "ftp://files.example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_backend_url_when_relative() {
        let mut config = Config::default();
        config.backend.url = "/api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_storage_path() {
        let mut config = Config::default();
        config.storage.path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
