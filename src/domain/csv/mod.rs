// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types for parsed CSV content
// No I/O, no async, no external dependencies

mod record;

pub use record::{Header, RowRecord};
