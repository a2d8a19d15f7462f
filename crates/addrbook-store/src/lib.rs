pub mod codec;
pub mod db;
pub mod error;
pub mod format;
pub(crate) mod fs;
pub mod paths;
pub mod schema;

use crate::error::Result;
use addrbook_core::AddressBook;
use chrono::NaiveDate;
use std::path::Path;

pub use error::{StoreError, StoreErrorKind};
pub use format::{BookFile, StorageFormat};

/// Saves `book` to `path`, picking the format from the file extension.
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    BookFile::new(path)?.save(book)
}

/// Loads a book from `path`, picking the format from the file extension.
pub fn load(path: &Path, today: NaiveDate) -> Result<AddressBook> {
    BookFile::new(path)?.load(today)
}

pub fn export_csv(book: &AddressBook, path: &Path) -> Result<()> {
    BookFile::with_format(path, StorageFormat::Csv).save(book)
}

pub fn import_csv(path: &Path, today: NaiveDate) -> Result<AddressBook> {
    BookFile::with_format(path, StorageFormat::Csv).load(today)
}
