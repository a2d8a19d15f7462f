use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("file {0} not found")]
    NotFound(PathBuf),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("malformed file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Json,
    MissingHomeDir,
    NotFound,
    InvalidDataPath,
    UnsupportedFormat,
    Schema,
    Malformed,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::UnsupportedFormat(_) => StoreErrorKind::UnsupportedFormat,
            StoreError::Schema(_) => StoreErrorKind::Schema,
            StoreError::Malformed { .. } => StoreErrorKind::Malformed,
        }
    }

    pub(crate) fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
