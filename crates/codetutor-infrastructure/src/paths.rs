//! Unified path management for CodeTutor configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/codetutor/         # Config directory
//! ├── config.toml              # Non-secret settings
//! └── secret.json              # Platform app id and API key
//! ```

use codetutor_core::config::{Base44Config, SecretConfig};
use codetutor_core::{CodeTutorError, Result};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "codetutor";

/// Resolves the CodeTutor configuration paths.
///
/// A base directory may be given to override the platform config directory
/// (tests, portable installs).
#[derive(Debug, Clone, Default)]
pub struct CodeTutorPaths {
    base: Option<PathBuf>,
}

impl CodeTutorPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: the base override, or e.g. `~/.config/codetutor/`
    /// - `Err(CodeTutorError::Config)`: the platform config directory is unknown
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| CodeTutorError::config("Cannot find config directory"))
    }

    /// Returns the path to config.toml.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to secret.json.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    /// Ensures the secret file exists, creating it with an empty template if
    /// it doesn't.
    ///
    /// On Unix the new file gets mode 600.
    pub fn ensure_secret_file(&self) -> Result<PathBuf> {
        let secret_path = self.secret_file()?;
        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            base44: Some(Base44Config {
                app_id: Some(String::new()),
                api_key: Some(String::new()),
                base_url: None,
            }),
        };
        let template_json = serde_json::to_string_pretty(&template)?;
        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}
