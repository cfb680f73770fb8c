use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::domain::schema::{TableRef, TableSchema};
use crate::infrastructure::notion::RecordStore;

/// Suffix appended to every created table title.
const TABLE_TITLE_SUFFIX: &str = "Table - Created by NotionFlow";

/// Materializes an inferred schema as a new remote table.
pub struct TablePublisher {
    store: Arc<dyn RecordStore + Send + Sync>,
}

impl TablePublisher {
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Create the remote table for `schema`, titled after the source file.
    ///
    /// Called exactly once per import and never retried: a retry after an
    /// ambiguous failure could create a duplicate table.
    pub async fn publish(&self, schema: &TableSchema, source: &Path) -> Result<TableRef> {
        let title = table_title(source);

        match self.store.create_table(&title, schema).await {
            Ok(table) => {
                info!(table_id = %table.0, "Created table");
                Ok(table)
            }
            Err(err) => Err(AppError::Publish(err.cause_message())),
        }
    }
}

/// Human-readable table title derived from the source file name.
fn table_title(source: &Path) -> String {
    let base = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "import".to_string());

    format!("{} {}", base, TABLE_TITLE_SUFFIX)
}
