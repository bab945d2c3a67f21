//! Configuration service implementation.
//!
//! Loads non-secret settings from config.toml (~/.config/codetutor/config.toml).

use crate::paths::CodeTutorPaths;
use codetutor_core::Result;
use codetutor_core::config::AppSettings;
use std::path::{Path, PathBuf};

/// Loads [`AppSettings`], falling back to defaults when the file is absent.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file_path: PathBuf,
}

impl ConfigService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            file_path: CodeTutorPaths::new(base_path).config_file()?,
        })
    }

    pub fn with_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub async fn load_settings(&self) -> Result<AppSettings> {
        match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => AppSettings::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppSettings::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_config_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.load_settings().await.unwrap(), AppSettings::default());
    }

    #[tokio::test]
    async fn test_load_settings_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 30\nlog_level = \"warn\"\n").unwrap();

        let settings = ConfigService::with_file(&path).load_settings().await.unwrap();
        assert_eq!(settings.request_timeout_secs, Some(30));
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }

    #[tokio::test]
    async fn test_invalid_config_is_serialization_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = [").unwrap();

        let err = ConfigService::with_file(&path).load_settings().await.unwrap_err();
        assert!(err.is_serialization());
    }
}
