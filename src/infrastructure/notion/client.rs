use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RecordStore;
use crate::domain::error::{AppError, Result};
use crate::domain::schema::{FieldDraft, FieldKind, RecordRef, TableRef, TableSchema};

const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Serialize)]
struct CreateDatabaseRequest {
    parent: PageParent,
    title: Vec<RichText>,
    properties: HashMap<String, PropertySpec>,
}

#[derive(Serialize)]
struct PageParent {
    #[serde(rename = "type")]
    kind: &'static str,
    page_id: String,
}

#[derive(Serialize)]
struct CreatePageRequest {
    parent: DatabaseParent,
    properties: HashMap<String, PropertyValue>,
}

#[derive(Serialize)]
struct DatabaseParent {
    database_id: String,
}

#[derive(Serialize)]
struct RichText {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent,
}

impl RichText {
    fn plain(content: &str) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct TextContent {
    content: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PropertySpec {
    Title { title: EmptySpec },
    RichText { rich_text: EmptySpec },
}

#[derive(Serialize)]
struct EmptySpec {}

#[derive(Serialize)]
#[serde(untagged)]
enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
}

#[derive(Deserialize)]
struct CreatedObject {
    id: String,
}

/// Notion REST client implementing the record-store capability.
///
/// Tables map to Notion databases under the configured parent page; records
/// map to pages inside the created database.
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    parent_page_id: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>, parent_page_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            parent_page_id: parent_page_id.into(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    fn database_request(&self, title: &str, schema: &TableSchema) -> CreateDatabaseRequest {
        let properties = schema
            .fields
            .iter()
            .map(|field| {
                let property = match field.kind {
                    FieldKind::Title => PropertySpec::Title { title: EmptySpec {} },
                    FieldKind::RichText => PropertySpec::RichText {
                        rich_text: EmptySpec {},
                    },
                };
                (field.name.clone(), property)
            })
            .collect();

        CreateDatabaseRequest {
            parent: PageParent {
                kind: "page_id",
                page_id: self.parent_page_id.clone(),
            },
            title: vec![RichText::plain(title)],
            properties,
        }
    }

    fn page_request(&self, table: &TableRef, fields: &[FieldDraft]) -> CreatePageRequest {
        let properties = fields
            .iter()
            .map(|draft| {
                let value = match draft.kind {
                    FieldKind::Title => PropertyValue::Title {
                        title: vec![RichText::plain(&draft.value)],
                    },
                    FieldKind::RichText => PropertyValue::RichText {
                        rich_text: vec![RichText::plain(&draft.value)],
                    },
                };
                (draft.name.clone(), value)
            })
            .collect();

        CreatePageRequest {
            parent: DatabaseParent {
                database_id: table.0.clone(),
            },
            properties,
        }
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<CreatedObject> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!("API error ({}): {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse JSON: {}", e)))
    }
}

#[async_trait]
impl RecordStore for NotionClient {
    async fn create_table(&self, title: &str, schema: &TableSchema) -> Result<TableRef> {
        let body = self.database_request(title, schema);
        let created = self.post_json("/databases", &body).await?;
        Ok(TableRef(created.id))
    }

    async fn create_record(&self, table: &TableRef, fields: &[FieldDraft]) -> Result<RecordRef> {
        let body = self.page_request(table, fields);
        let created = self.post_json("/pages", &body).await?;
        Ok(RecordRef(created.id))
    }
}
