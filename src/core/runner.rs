use crate::adapters::database::SqliteSessionProvider;
use crate::config::Command;
use crate::core::application_dao::ApplicationDao;
use crate::core::{ApplicationRepository, ConfigProvider, Result};
use crate::utils::validation::Validate;

/// Runs one CLI command against the configured database and returns pretty JSON.
///
/// The pool is closed before returning, whether the command succeeded or not.
pub async fn run_command<C: ConfigProvider + Validate>(
    config: &C,
    command: &Command,
) -> Result<String> {
    config.validate()?;

    let sessions = SqliteSessionProvider::connect(config).await?;
    let dao = ApplicationDao::new(sessions.clone());

    let output = render(&dao, command).await;
    sessions.close().await;
    output
}

async fn render<R: ApplicationRepository>(repository: &R, command: &Command) -> Result<String> {
    match command {
        Command::ByUser { user_id } => {
            let records = repository.applications_by_user(*user_id).await?;
            tracing::info!("✅ {} applications for user {}", records.len(), user_id);
            Ok(serde_json::to_string_pretty(&records)?)
        }
        Command::All => {
            let records = repository.all_applications().await?;
            tracing::info!("✅ {} applications in total", records.len());
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}
