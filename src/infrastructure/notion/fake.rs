// In-memory record store for exercising the import pipeline without network
// access. Failures are injected per table or per row title.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::RecordStore;
use crate::domain::error::{AppError, Result};
use crate::domain::schema::{FieldDraft, FieldKind, RecordRef, TableRef, TableSchema};

#[derive(Debug, Clone)]
pub struct CreatedTable {
    pub title: String,
    pub schema: TableSchema,
}

#[derive(Debug, Clone)]
pub struct CreatedRecord {
    pub table: TableRef,
    pub fields: Vec<FieldDraft>,
}

#[derive(Default)]
pub struct FakeRecordStore {
    pub tables: Mutex<Vec<CreatedTable>>,
    pub records: Mutex<Vec<CreatedRecord>>,
    fail_table: Mutex<bool>,
    fail_rows: Mutex<HashSet<String>>,
}

impl FakeRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create_table` call fail.
    pub fn fail_table_creation(&self) {
        *self.fail_table.lock().unwrap() = true;
    }

    /// Make `create_record` fail for rows whose title value equals `title`.
    pub fn fail_row(&self, title: &str) {
        self.fail_rows.lock().unwrap().insert(title.to_string());
    }

    pub fn table_count(&self) -> usize {
        self.tables.lock().unwrap().len()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Title values of created records, in creation order.
    pub fn record_titles(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| title_value(&record.fields))
            .collect()
    }
}

fn title_value(fields: &[FieldDraft]) -> String {
    fields
        .iter()
        .find(|field| field.kind == FieldKind::Title)
        .map(|field| field.value.clone())
        .unwrap_or_default()
}

#[async_trait]
impl RecordStore for FakeRecordStore {
    async fn create_table(&self, title: &str, schema: &TableSchema) -> Result<TableRef> {
        if *self.fail_table.lock().unwrap() {
            return Err(AppError::Remote("table creation refused".to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        tables.push(CreatedTable {
            title: title.to_string(),
            schema: schema.clone(),
        });
        Ok(TableRef(format!("table-{}", tables.len())))
    }

    async fn create_record(&self, table: &TableRef, fields: &[FieldDraft]) -> Result<RecordRef> {
        let title = title_value(fields);
        if self.fail_rows.lock().unwrap().contains(&title) {
            return Err(AppError::Remote(format!("record \"{}\" refused", title)));
        }

        let mut records = self.records.lock().unwrap();
        records.push(CreatedRecord {
            table: table.clone(),
            fields: fields.to_vec(),
        });
        Ok(RecordRef(format!("record-{}", records.len())))
    }
}
