//! Configuration types.
//!
//! `SecretConfig` mirrors `secret.json`, `AppSettings` mirrors `config.toml`,
//! and `ApiConfig` is the resolved connection a client is built from.

use crate::error::{CodeTutorError, Result};
use crate::session::DEBUGGING_SESSION_ENTITY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Platform origin used when no base URL is configured.
pub const DEFAULT_BASE44_URL: &str = "https://app.base44.com";

pub const ENV_APP_ID: &str = "BASE44_APP_ID";
pub const ENV_API_KEY: &str = "BASE44_API_KEY";
pub const ENV_BASE_URL: &str = "BASE44_BASE_URL";

/// Root structure of secret.json
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub base44: Option<Base44Config>,
}

/// base44 section of secret.json
#[derive(Deserialize, Serialize, Clone, Default)]
pub struct Base44Config {
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl fmt::Debug for Base44Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base44Config")
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Non-secret settings from config.toml
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// Per-request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Resolved connection settings for the platform API.
///
/// The API key lives only inside this value and is never printed by `Debug`.
#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    app_id: String,
    api_key: String,
    request_timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE44_URL.to_string(),
            app_id: app_id.into(),
            api_key: api_key.into(),
            request_timeout: None,
        }
    }

    /// Overrides the platform origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolves the configuration field by field: secret.json first, then the
    /// environment lookup.
    ///
    /// `env` is injected so callers (and tests) decide where variables come from.
    pub fn resolve<F>(secrets: &SecretConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = secrets.base44.clone().unwrap_or_default();
        let pick = |from_file: Option<String>, var: &str| {
            from_file
                .filter(|v| !v.trim().is_empty())
                .or_else(|| env(var).filter(|v| !v.trim().is_empty()))
        };

        let app_id = pick(section.app_id, ENV_APP_ID).ok_or_else(|| {
            CodeTutorError::config(format!(
                "base44 app_id not found in secret.json or {}",
                ENV_APP_ID
            ))
        })?;
        let api_key = pick(section.api_key, ENV_API_KEY).ok_or_else(|| {
            CodeTutorError::config(format!(
                "base44 api_key not found in secret.json or {}",
                ENV_API_KEY
            ))
        })?;

        let mut config = Self::new(app_id, api_key);
        if let Some(base_url) = pick(section.base_url, ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// `{base}/api/apps/{app_id}/entities/{entity}`
    pub fn entity_url(&self, entity: &str) -> String {
        format!("{}/api/apps/{}/entities/{}", self.base_url, self.app_id, entity)
    }

    /// `{base}/api/apps/{app_id}/entities/{entity}/{id}`
    pub fn record_url(&self, entity: &str, id: &str) -> String {
        format!("{}/{}", self.entity_url(entity), id)
    }

    pub fn sessions_url(&self) -> String {
        self.entity_url(DEBUGGING_SESSION_ENTITY)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_entity_urls() {
        let config = ApiConfig::new("app-1", "key");
        assert_eq!(
            config.sessions_url(),
            "https://app.base44.com/api/apps/app-1/entities/DebuggingSession"
        );
        assert_eq!(
            config.record_url(DEBUGGING_SESSION_ENTITY, "abc123"),
            "https://app.base44.com/api/apps/app-1/entities/DebuggingSession/abc123"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ApiConfig::new("app", "key").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_resolve_prefers_secret_file() {
        let secrets = SecretConfig {
            base44: Some(Base44Config {
                app_id: Some("file-app".to_string()),
                api_key: Some("file-key".to_string()),
                base_url: None,
            }),
        };
        let env = env_from(&[(ENV_APP_ID, "env-app"), (ENV_BASE_URL, "http://localhost:9")]);

        let config = ApiConfig::resolve(&secrets, env).unwrap();
        assert_eq!(config.app_id(), "file-app");
        assert_eq!(config.api_key(), "file-key");
        assert_eq!(config.base_url(), "http://localhost:9");
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let secrets = SecretConfig {
            base44: Some(Base44Config {
                app_id: Some("  ".to_string()),
                ..Default::default()
            }),
        };
        let env = env_from(&[(ENV_APP_ID, "env-app"), (ENV_API_KEY, "env-key")]);

        let config = ApiConfig::resolve(&secrets, env).unwrap();
        assert_eq!(config.app_id(), "env-app");
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.base_url(), DEFAULT_BASE44_URL);
    }

    #[test]
    fn test_resolve_missing_key_is_config_error() {
        let env = env_from(&[(ENV_APP_ID, "env-app")]);
        let err = ApiConfig::resolve(&SecretConfig::default(), env).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ApiConfig::new("app", "super-secret-key");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));

        let section = Base44Config {
            api_key: Some("super-secret-key".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", section).contains("super-secret-key"));
    }

    #[test]
    fn test_app_settings_from_toml() {
        let settings = AppSettings::from_toml_str("request_timeout_secs = 15\nlog_level = \"debug\"\n")
            .unwrap();
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));

        assert_eq!(AppSettings::from_toml_str("").unwrap(), AppSettings::default());
        assert!(AppSettings::from_toml_str("request_timeout_secs = \"soon\"").is_err());
    }
}
