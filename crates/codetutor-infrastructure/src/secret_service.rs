//! Secret service implementation.
//!
//! Reads the platform credential from secret.json, caching it for the
//! lifetime of the service.

use crate::paths::CodeTutorPaths;
use codetutor_core::config::SecretConfig;
use codetutor_core::secret::SecretService;
use codetutor_core::{CodeTutorError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Service for managing secret configuration.
///
/// # Example
///
/// ```ignore
/// use codetutor_infrastructure::SecretServiceImpl;
/// use codetutor_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new_default()?;
/// let api = service.load_api_config().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    file_path: PathBuf,
    /// Cached secret config loaded from disk.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Uses secret.json in the platform config directory.
    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Uses secret.json under `base_path` when given.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let file_path = CodeTutorPaths::new(base_path).secret_file()?;
        Ok(Self::with_file(file_path))
    }

    /// Uses the given file directly.
    pub fn with_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn read_from_disk(&self) -> Result<SecretConfig> {
        let content = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "[SecretService] {} not found, relying on environment",
                    self.file_path.display()
                );
                return Ok(SecretConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        // Never include the file content in the error, it holds the key
        serde_json::from_str(&content).map_err(|e| CodeTutorError::Serialization {
            format: "JSON".to_string(),
            message: format!(
                "Failed to parse {} (line {}, column {})",
                self.file_path.display(),
                e.line(),
                e.column()
            ),
        })
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        {
            let cached = self.secrets.read().await;
            if let Some(secrets) = cached.as_ref() {
                return Ok(secrets.clone());
            }
        }

        let loaded = self.read_from_disk().await?;
        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        tokio::fs::try_exists(&self.file_path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_empty_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let service = SecretServiceImpl::new(Some(temp_dir.path())).unwrap();

        assert!(!service.secret_file_exists().await);
        let secrets = service.load_secrets().await.unwrap();
        assert!(secrets.base44.is_none());
    }

    #[tokio::test]
    async fn test_load_and_cache_secrets() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(
            &path,
            r#"{"base44": {"app_id": "app-1", "api_key": "key-1"}}"#,
        )
        .unwrap();

        let service = SecretServiceImpl::with_file(&path);
        assert!(service.secret_file_exists().await);

        let secrets = service.load_secrets().await.unwrap();
        let base44 = secrets.base44.unwrap();
        assert_eq!(base44.app_id.as_deref(), Some("app-1"));
        assert_eq!(base44.api_key.as_deref(), Some("key-1"));

        // Served from cache after the file disappears
        std::fs::remove_file(&path).unwrap();
        let cached = service.load_secrets().await.unwrap();
        assert_eq!(cached.base44.unwrap().app_id.as_deref(), Some("app-1"));
    }

    #[tokio::test]
    async fn test_malformed_file_does_not_leak_content() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, r#"{"base44": {"api_key": "leaky-key""#).unwrap();

        let service = SecretServiceImpl::with_file(&path);
        let err = service.load_secrets().await.unwrap_err();
        assert!(err.is_serialization());
        assert!(!err.to_string().contains("leaky-key"));
    }
}
