use anyhow::Result;
use clap::{Parser, Subcommand};
use codetutor_core::config::AppSettings;
use codetutor_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "codetutor")]
#[command(about = "CodeTutor CLI - debugging sessions and navigation for the voice-powered tutor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and update debugging sessions on the platform
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },
    /// Print the sidebar menu, highlighting the entry for the current location
    Nav {
        /// Current location path, e.g. /Debugger
        #[arg(long)]
        current: Option<String>,
    },
    /// Summarise learning progress from debugging sessions
    Progress {
        /// Only count sessions created by this user
        #[arg(long)]
        created_by: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create secret.json with an empty template if it does not exist
    Init,
}

#[derive(Subcommand)]
enum SessionsAction {
    /// List sessions, optionally filtered
    List {
        /// Equality filter, repeatable (field=value)
        #[arg(long = "filter", value_name = "FIELD=VALUE")]
        filters: Vec<String>,
        /// Sort key, prefix with '-' for descending (e.g. -created_date)
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a single session
    Get { id: String },
    /// Overwrite fields on a session
    Update {
        id: String,
        /// Field assignment, repeatable (e.g. user_satisfaction=5)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Rate the most recent session of a user
    Rate {
        created_by: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings().await;
    init_tracing(&settings);

    match cli.command {
        Commands::Sessions { action } => match action {
            SessionsAction::List {
                filters,
                sort,
                limit,
            } => commands::sessions::list(&settings, &filters, sort, limit).await?,
            SessionsAction::Get { id } => commands::sessions::get(&settings, &id).await?,
            SessionsAction::Update { id, assignments } => {
                commands::sessions::update(&settings, &id, &assignments).await?
            }
            SessionsAction::Rate { created_by, rating } => {
                commands::sessions::rate(&settings, &created_by, rating).await?
            }
        },
        Commands::Nav { current } => commands::nav::show(current.as_deref()),
        Commands::Progress { created_by, json } => {
            commands::progress::show(&settings, created_by, json).await?
        }
        Commands::Init => commands::init::run()?,
    }

    Ok(())
}

/// Reads config.toml, falling back to defaults when it can't be located or
/// parsed. Runs before tracing is installed, so problems go to stderr.
async fn load_settings() -> AppSettings {
    settings_or_default(ConfigService::new(None)).await
}

async fn settings_or_default(service: codetutor_core::Result<ConfigService>) -> AppSettings {
    let loaded = match service {
        Ok(service) => service.load_settings().await,
        Err(e) => Err(e),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config.toml: {}", e);
        AppSettings::default()
    })
}

/// `RUST_LOG` wins, then `log_level` from config.toml, then `info`.
fn init_tracing(settings: &AppSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = settings.log_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use codetutor_core::CodeTutorError;

    #[tokio::test]
    async fn test_settings_default_without_config_dir() {
        let missing = Err(CodeTutorError::config("Could not determine config directory"));
        assert_eq!(settings_or_default(missing).await, AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_default_on_invalid_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();

        let settings = settings_or_default(Ok(ConfigService::with_file(&path))).await;
        assert_eq!(settings, AppSettings::default());
    }
}
