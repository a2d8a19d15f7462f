use crate::codec::{csv, json, snapshot};
use crate::error::{Result, StoreError};
use crate::fs::write_atomic;
use addrbook_core::AddressBook;
use chrono::NaiveDate;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Json,
    Snapshot,
    Csv,
}

impl StorageFormat {
    /// Picks a format from the file extension; no extension means JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        match extension.as_deref() {
            None | Some("json") => Ok(StorageFormat::Json),
            Some("db" | "sqlite" | "sqlite3" | "bin") => Ok(StorageFormat::Snapshot),
            Some("csv") => Ok(StorageFormat::Csv),
            Some(_) => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Snapshot => "snapshot",
            StorageFormat::Csv => "csv",
        }
    }
}

/// A file on disk that an address book is saved to and loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    path: PathBuf,
    format: StorageFormat,
}

impl BookFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = StorageFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replaces the file with `book`; an existing file survives a failed save.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        match self.format {
            StorageFormat::Json => write_atomic(&self.path, &json::encode(book)?),
            StorageFormat::Csv => write_atomic(&self.path, csv::encode(book).as_bytes()),
            StorageFormat::Snapshot => snapshot::write(book, &self.path),
        }
    }

    /// Reads and validates the whole file before returning a book.
    pub fn load(&self, today: NaiveDate) -> Result<AddressBook> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }
        match self.format {
            StorageFormat::Json => json::decode(&self.read_text()?, &self.path, today),
            StorageFormat::Csv => csv::decode(&self.read_text()?, &self.path, today),
            StorageFormat::Snapshot => snapshot::read(&self.path, today),
        }
    }

    fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            ErrorKind::InvalidData => StoreError::malformed(&self.path, "file is not valid UTF-8"),
            _ => StoreError::Io(err),
        })
    }
}
