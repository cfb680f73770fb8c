use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use crate::application::{CsvImportUseCase, ImportSummary};
use crate::domain::error::Result;
use crate::infrastructure::config::Settings;
use crate::infrastructure::notion::NotionClient;
use crate::interfaces::cli::select_csv_file;

/// Run one import and map its terminal state to an exit code. All fatal
/// errors surface here; nothing below this point terminates the process.
pub async fn run() -> ExitCode {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    let _ = dotenvy::dotenv();

    match import().await {
        Ok(summary) => {
            info!(
                attempted = summary.attempted,
                succeeded = summary.succeeded,
                failed = summary.failed,
                "CSV processing complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Import aborted");
            ExitCode::FAILURE
        }
    }
}

async fn import() -> Result<ImportSummary> {
    let settings = Settings::load()?;
    let source = select_csv_file()?;

    let client = NotionClient::new(settings.notion_token, settings.notion_page_id);
    let use_case = CsvImportUseCase::new(Arc::new(client));

    use_case.run(&source).await
}
