use std::sync::Arc;

use crate::domain::csv::RowRecord;
use crate::domain::error::{AppError, Result};
use crate::domain::schema::{build_drafts, RecordRef, TableRef, TableSchema};
use crate::infrastructure::notion::RecordStore;

/// Placeholder used when a row's primary value is empty.
const UNTITLED: &str = "Untitled";

/// Submits individual rows to an already-created remote table.
pub struct RowUploader {
    store: Arc<dyn RecordStore + Send + Sync>,
}

impl RowUploader {
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Upload one row.
    ///
    /// Every schema field is submitted in header order; values the row does
    /// not carry go up as empty strings, never omitted. A failure identifies
    /// the row by its primary value so the caller can report it and move on.
    pub async fn upload(
        &self,
        table: &TableRef,
        record: &RowRecord,
        schema: &TableSchema,
    ) -> Result<RecordRef> {
        let drafts = build_drafts(record, schema);

        match self.store.create_record(table, &drafts).await {
            Ok(record_ref) => Ok(record_ref),
            Err(err) => Err(AppError::Upload {
                row: row_label(record, schema),
                cause: err.cause_message(),
            }),
        }
    }
}

/// Primary value of a row, or a placeholder when it is empty.
pub fn row_label(record: &RowRecord, schema: &TableSchema) -> String {
    let primary = record.value(&schema.title_field().name);
    if primary.is_empty() {
        UNTITLED.to_string()
    } else {
        primary.to_string()
    }
}
