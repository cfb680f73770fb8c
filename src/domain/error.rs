use std::fmt;

#[derive(Debug, Clone)]
pub enum AppError {
    Configuration(String),
    Selection(String),
    MalformedInput(String),
    EmptyHeader(String),
    EmptyDataset(String),
    Publish(String),
    Upload { row: String, cause: String },
    Remote(String),
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Selection(msg) => write!(f, "Selection error: {}", msg),
            AppError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            AppError::EmptyHeader(msg) => write!(f, "Empty header: {}", msg),
            AppError::EmptyDataset(msg) => write!(f, "Empty dataset: {}", msg),
            AppError::Publish(msg) => write!(f, "Publish error: {}", msg),
            AppError::Upload { row, cause } => {
                write!(f, "Upload error for row \"{}\": {}", row, cause)
            }
            AppError::Remote(msg) => write!(f, "Remote store error: {}", msg),
            AppError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl AppError {
    /// Message of the underlying failure. `Remote` errors are unwrapped so
    /// the transport message is not double-prefixed when rewrapped as
    /// `Publish` or `Upload`.
    pub fn cause_message(self) -> String {
        match self {
            AppError::Remote(msg) => msg,
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
