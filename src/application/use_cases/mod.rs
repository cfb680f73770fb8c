pub mod import_csv;
pub mod row_uploader;
pub mod table_publisher;
