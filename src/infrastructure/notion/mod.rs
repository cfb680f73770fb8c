pub mod client;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::schema::{FieldDraft, RecordRef, TableRef, TableSchema};

pub use client::NotionClient;

/// Capability interface over the remote structured-record store.
///
/// `create_table` materializes a schema as a new remote table;
/// `create_record` appends one row to a previously created table.
/// Implementations own all transport and authentication details, so the
/// import pipeline can run against an in-memory fake in tests.
#[async_trait]
pub trait RecordStore {
    async fn create_table(&self, title: &str, schema: &TableSchema) -> Result<TableRef>;

    async fn create_record(&self, table: &TableRef, fields: &[FieldDraft]) -> Result<RecordRef>;
}
