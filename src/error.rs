use std::path::PathBuf;
use thiserror::Error;

/// Fatal dataset load failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required columns: {} (need r, g, b or a hex column)", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<&'static str>,
}

/// A data row that could not be turned into a color. Skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct RowError {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("image not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}
