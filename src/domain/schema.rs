// ============================================================
// TABLE SCHEMA TYPES
// ============================================================
// Remote table column definitions derived from a CSV header

use crate::domain::csv::{Header, RowRecord};

/// Column kind in the remote table.
///
/// The first header column always becomes the title column; every other
/// column is opaque rich text. Cell values are never inspected to infer
/// richer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    RichText,
}

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
}

/// Target table schema, one field per header column, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub fields: Vec<SchemaField>,
}

impl TableSchema {
    /// The title field (always present, always first).
    pub fn title_field(&self) -> &SchemaField {
        &self.fields[0]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Derive a table schema from a header: index 0 becomes the title field, all
/// remaining columns become rich text.
pub fn infer_schema(header: &Header) -> TableSchema {
    let fields = header
        .names()
        .iter()
        .enumerate()
        .map(|(index, name)| SchemaField {
            name: name.clone(),
            kind: if index == 0 {
                FieldKind::Title
            } else {
                FieldKind::RichText
            },
        })
        .collect();

    TableSchema { fields }
}

/// Handle to a remote table created during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef(pub String);

/// Handle to a single remote record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef(pub String);

/// One field of a record as submitted to the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
}

/// Build the remote field payload for one row: every schema field, in header
/// order, defaulting values the row does not carry to the empty string.
pub fn build_drafts(record: &RowRecord, schema: &TableSchema) -> Vec<FieldDraft> {
    schema
        .fields
        .iter()
        .map(|field| FieldDraft {
            name: field.name.clone(),
            kind: field.kind,
            value: record.value(&field.name).to_string(),
        })
        .collect()
}
