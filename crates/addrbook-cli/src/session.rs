use addrbook_core::AddressBook;
use addrbook_store::error::Result;
use addrbook_store::BookFile;
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// State of one interactive run: the book being edited and the file it lives in.
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    book_file: BookFile,
    page_size: usize,
}

impl Session {
    pub fn new(book_file: BookFile, page_size: usize) -> Self {
        Self {
            book: AddressBook::new(),
            book_file,
            page_size,
        }
    }

    /// Starts a session, loading the session file when it already exists.
    pub fn open(book_file: BookFile, page_size: usize, today: NaiveDate) -> Result<Self> {
        let mut session = Self::new(book_file, page_size);
        if session.book_file.exists() {
            session.book = session.book_file.load(today)?;
            debug!(
                path = %session.book_file.path().display(),
                contacts = session.book.len(),
                "address book loaded"
            );
        } else {
            debug!(path = %session.book_file.path().display(), "starting with an empty book");
        }
        Ok(session)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn book_file(&self) -> &BookFile {
        &self.book_file
    }

    pub fn book_path(&self) -> &Path {
        self.book_file.path()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Writes the book to the session file.
    pub fn save(&self) -> Result<()> {
        self.book_file.save(&self.book)?;
        debug!(
            path = %self.book_file.path().display(),
            contacts = self.book.len(),
            "address book saved"
        );
        Ok(())
    }
}
