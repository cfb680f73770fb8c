// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Streaming CSV parsing and header extraction

mod csv_parser;

pub use csv_parser::{CsvParser, RecordStream};
