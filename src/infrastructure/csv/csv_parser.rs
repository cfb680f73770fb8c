// ============================================================
// CSV PARSER
// ============================================================
// Parse comma-delimited sources with a mandatory header row

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::csv::{Header, RowRecord};
use crate::domain::error::{AppError, Result};

/// CSV parser for comma-delimited sources with a header row.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Open a CSV file and return a lazy stream of its data rows.
    pub fn open(&self, path: &Path) -> Result<RecordStream<File>> {
        let file = File::open(path)
            .map_err(|e| AppError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
        self.stream(file)
    }

    /// Read the header row from `source` and return a pull-based stream of
    /// the remaining rows.
    ///
    /// The header is consumed eagerly so the caller always holds a validated
    /// [`Header`] before the first data row is parsed; rows themselves are
    /// only read as the stream is advanced.
    pub fn stream<R: Read>(&self, source: R) -> Result<RecordStream<R>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(source);

        let raw_header = reader
            .headers()
            .map_err(|e| AppError::MalformedInput(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let header = Header::from_names(raw_header.iter())?;
        let columns = raw_header.iter().map(|name| name.to_string()).collect();

        Ok(RecordStream {
            header,
            columns,
            records: reader.into_records(),
        })
    }
}

/// Lazy, forward-only stream of parsed data rows.
///
/// The header row is consumed at construction and never emitted. Blank rows
/// are skipped; short rows read as empty strings for their missing columns
/// and values past the header width are dropped.
pub struct RecordStream<R: Read> {
    header: Header,
    /// Raw (trimmed) header names by position, including unnamed columns, so
    /// row values map back to the right name even when the header dropped
    /// some entries. A duplicate column's later value wins.
    columns: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> RecordStream<R> {
    pub fn header(&self) -> &Header {
        &self.header
    }

    fn build_record(&self, raw: &StringRecord) -> RowRecord {
        let mut record = RowRecord::new();
        for (index, name) in self.columns.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            record.set(name.clone(), raw.get(index).unwrap_or("").to_string());
        }
        record
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<RowRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.records.next()? {
                Ok(raw) => raw,
                Err(e) => {
                    return Some(Err(AppError::MalformedInput(format!(
                        "Failed to parse CSV row: {}",
                        e
                    ))))
                }
            };

            if raw.iter().all(|field| field.is_empty()) {
                continue;
            }

            return Some(Ok(self.build_record(&raw)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE_CSV: &str = "\
Name,Age,City
Alice,30,Oslo
Bob,25,Lima";

    fn collect(content: &str) -> (Header, Vec<RowRecord>) {
        let stream = CsvParser::new().stream(content.as_bytes()).unwrap();
        let header = stream.header().clone();
        let records = stream.collect::<Result<Vec<_>>>().unwrap();
        (header, records)
    }

    #[test]
    fn test_header_is_extracted_and_not_emitted() {
        let (header, records) = collect(PEOPLE_CSV);

        assert_eq!(header.names(), &["Name", "Age", "City"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value("Name"), "Alice");
        assert_eq!(records[1].value("City"), "Lima");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let (header, records) = collect("Name , Age\n Alice , 30 ");

        assert_eq!(header.names(), &["Name", "Age"]);
        assert_eq!(records[0].value("Name"), "Alice");
        assert_eq!(records[0].value("Age"), "30");
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let (_, records) = collect("Name,Age\nAlice,30\n\n ,\nBob,25");

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value("Name"), "Bob");
    }

    #[test]
    fn test_short_row_reads_as_empty_strings() {
        let (_, records) = collect("Name,Age,City\nAlice");

        assert_eq!(records[0].value("Name"), "Alice");
        assert_eq!(records[0].value("Age"), "");
        assert_eq!(records[0].value("City"), "");
    }

    #[test]
    fn test_long_row_drops_excess_values() {
        let (_, records) = collect("Name,Age\nAlice,30,extra,values");

        assert_eq!(records[0].value("Name"), "Alice");
        assert_eq!(records[0].value("Age"), "30");
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let (_, records) = collect("Name,Notes\nAlice,\"likes csv, quotes\"");

        assert_eq!(records[0].value("Notes"), "likes csv, quotes");
    }

    #[test]
    fn test_unnamed_column_values_are_ignored() {
        let (header, records) = collect("Name,,Age\nAlice,skipped,30");

        assert_eq!(header.names(), &["Name", "Age"]);
        assert_eq!(records[0].value("Age"), "30");
        assert_eq!(records[0].value(""), "");
    }

    #[test]
    fn test_duplicate_column_last_value_wins() {
        let (header, records) = collect("Name,Name\nfirst,second");

        assert_eq!(header.names(), &["Name"]);
        assert_eq!(records[0].value("Name"), "second");
    }

    #[test]
    fn test_empty_source_is_empty_header() {
        let err = CsvParser::new().stream("".as_bytes()).err().unwrap();
        assert!(matches!(err, AppError::EmptyHeader(_)));
    }

    #[test]
    fn test_headerless_source_is_empty_header() {
        let err = CsvParser::new().stream(",,\n".as_bytes()).err().unwrap();
        assert!(matches!(err, AppError::EmptyHeader(_)));
    }

    #[test]
    fn test_invalid_utf8_header_is_malformed_input() {
        let bytes: &[u8] = b"Na\xffme,Age\nAlice,30";
        let err = CsvParser::new().stream(bytes).err().unwrap();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_invalid_utf8_row_is_malformed_input() {
        let bytes: &[u8] = b"Name,Age\nAl\xffice,30";
        let stream = CsvParser::new().stream(bytes).unwrap();
        let result = stream.collect::<Result<Vec<_>>>();
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn test_rows_are_pulled_lazily() {
        let mut stream = CsvParser::new()
            .stream("Name\nAlice\nBob\nCarol".as_bytes())
            .unwrap();

        let first = stream.next().unwrap().unwrap();
        assert_eq!(first.value("Name"), "Alice");
        assert_eq!(stream.count(), 2);
    }
}
