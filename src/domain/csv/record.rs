// ============================================================
// CSV RECORD TYPES
// ============================================================
// Header and row types produced by CSV parsing

use std::collections::HashMap;

use crate::domain::error::{AppError, Result};

/// Ordered list of column names taken from a source's first row.
///
/// Column order is meaningful: the first entry is the primary column of the
/// target table. Names are trimmed, unnamed columns are dropped, and a
/// duplicate name keeps its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Build a header from raw column names, rejecting sources that end up
    /// with no usable column at all.
    pub fn from_names<I>(names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if out.iter().any(|existing| existing == name) {
                continue;
            }
            out.push(name.to_string());
        }

        if out.is_empty() {
            return Err(AppError::EmptyHeader(
                "CSV file must have at least one column header".to_string(),
            ));
        }

        Ok(Self { names: out })
    }

    /// Name of the primary column (always the first one).
    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One data row as a column-name to text-value mapping.
///
/// Values for columns the row does not carry read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    values: HashMap<String, String>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value for `name`, defaulting to the empty string.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}
