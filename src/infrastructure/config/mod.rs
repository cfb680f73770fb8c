use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;

use crate::domain::error::{AppError, Result};

const MISSING_CONFIG_HELP: &str = "Missing necessary information. In the .env file, please set \
NOTION_TOKEN to your Notion account's secret key and NOTION_PAGE_ID to the ID of a page you have \
created in Notion. See README for more details.";

/// Runtime configuration supplied through the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub notion_token: String,
    pub notion_page_id: String,
}

impl Settings {
    /// Read settings from the process environment, failing fast when either
    /// value is missing or blank.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new().merge(Env::raw().only(&["NOTION_TOKEN", "NOTION_PAGE_ID"])),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|_| AppError::Configuration(MISSING_CONFIG_HELP.to_string()))?;

        if settings.notion_token.trim().is_empty() || settings.notion_page_id.trim().is_empty() {
            return Err(AppError::Configuration(MISSING_CONFIG_HELP.to_string()));
        }

        Ok(settings)
    }
}
