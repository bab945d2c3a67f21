//! Secret management service trait.
//!
//! Defines the interface for loading the platform credential at startup.

use crate::config::{ApiConfig, SecretConfig};
use crate::error::Result;

/// Service for managing secret configuration.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Secret files have appropriate permissions (e.g., 600 on Unix)
/// - Secrets are never logged or exposed in error messages
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    ///
    /// A missing secret file is not an error; it yields an empty config so
    /// that environment variables can still supply the values.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Checks if the secret file exists.
    async fn secret_file_exists(&self) -> bool;

    /// Resolves the connection settings for the platform API.
    async fn load_api_config(&self) -> Result<ApiConfig> {
        let secrets = self.load_secrets().await?;
        ApiConfig::resolve(&secrets, |key| std::env::var(key).ok())
    }
}
