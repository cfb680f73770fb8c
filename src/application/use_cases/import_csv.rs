use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::application::use_cases::row_uploader::{row_label, RowUploader};
use crate::application::use_cases::table_publisher::TablePublisher;
use crate::domain::error::{AppError, Result};
use crate::domain::schema::{infer_schema, TableRef};
use crate::infrastructure::csv::{CsvParser, RecordStream};
use crate::infrastructure::notion::RecordStore;

/// Outcome of a completed import run.
///
/// Partial success is still a completed run: failed rows are counted, not
/// escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub table: TableRef,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// CSV import use case.
///
/// Drives the full pipeline: parse and buffer the source, infer the target
/// schema from the header, create the remote table, then upload the rows one
/// by one in source order. A single row's failure is logged and counted;
/// every other failure aborts the run and is returned to the caller, which
/// decides process termination.
pub struct CsvImportUseCase {
    parser: CsvParser,
    publisher: TablePublisher,
    uploader: RowUploader,
}

impl CsvImportUseCase {
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self {
            parser: CsvParser::new(),
            publisher: TablePublisher::new(store.clone()),
            uploader: RowUploader::new(store),
        }
    }

    pub async fn run(&self, source: &Path) -> Result<ImportSummary> {
        let stream = self.parser.open(source)?;
        self.import(source, stream).await
    }

    async fn import<R: Read>(
        &self,
        source: &Path,
        stream: RecordStream<R>,
    ) -> Result<ImportSummary> {
        // Drain the source before any remote call: the field set feeding
        // schema inference must be complete and stable before the table
        // exists, and a parse failure halfway through must not leave a
        // half-filled table behind.
        let header = stream.header().clone();
        let records = stream.collect::<Result<Vec<_>>>()?;

        if records.is_empty() {
            return Err(AppError::EmptyDataset(
                "CSV file is empty or contains no valid data".to_string(),
            ));
        }

        let schema = infer_schema(&header);
        let table = self.publisher.publish(&schema, source).await?;

        let mut succeeded = 0;
        let mut failed = 0;
        for record in &records {
            match self.uploader.upload(&table, record, &schema).await {
                Ok(_) => {
                    succeeded += 1;
                    info!(row = %row_label(record, &schema), "Added row");
                }
                Err(err) => {
                    failed += 1;
                    error!(error = %err, "Failed to add row");
                }
            }
        }

        Ok(ImportSummary {
            table,
            attempted: records.len(),
            succeeded,
            failed,
        })
    }
}
