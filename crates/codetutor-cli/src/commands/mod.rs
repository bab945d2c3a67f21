pub mod init;
pub mod nav;
pub mod progress;
pub mod sessions;

use anyhow::{Context, Result};
use codetutor_core::config::AppSettings;
use codetutor_core::secret::SecretService;
use codetutor_infrastructure::{Base44SessionRepository, SecretServiceImpl};

/// Resolves the platform credential and builds the session repository.
pub async fn connect(settings: &AppSettings) -> Result<Base44SessionRepository> {
    let secrets = SecretServiceImpl::new_default()?;
    let config = secrets
        .load_api_config()
        .await
        .with_context(|| {
            format!(
                "Run `codetutor init` and fill in {}, or set the BASE44_* environment variables",
                secrets.file_path().display()
            )
        })?
        .with_request_timeout(settings.request_timeout());

    let repo = Base44SessionRepository::new(config);
    tracing::debug!("Using {:?}", repo.config());
    Ok(repo)
}
