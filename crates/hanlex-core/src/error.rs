/// Errors that abort one source's parse entirely.
///
/// Record-level failures are not represented here; parsers report those
/// as diagnostics and keep going with the remaining records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("invalid JSON in {0}: {1}")]
    InvalidJson(String, #[source] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
