use super::{CommandResult, Reply};
use crate::grammar::Args;
use crate::session::Session;
use addrbook_store::paths::{with_default_extension, EXPORT_FILENAME};
use addrbook_store::{self as store, BookFile};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::debug;

const BOOK_EXTENSION: &str = "json";
const EXPORT_EXTENSION: &str = "csv";

/// The file named on the line, or the session file.
fn book_file(session: &Session, args: &Args) -> Result<BookFile, store::StoreError> {
    match args.get(0) {
        Some(raw) => BookFile::new(with_default_extension(raw, BOOK_EXTENSION)),
        None => Ok(session.book_file().clone()),
    }
}

/// The CSV file named on the line, or `contacts.csv` next to the session file.
fn csv_path(session: &Session, args: &Args) -> PathBuf {
    match args.get(0) {
        Some(raw) => with_default_extension(raw, EXPORT_EXTENSION),
        None => session.book_path().with_file_name(EXPORT_FILENAME),
    }
}

pub fn save(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let file = book_file(session, args)?;
    file.save(session.book())?;
    debug!(path = %file.path().display(), format = file.format().as_str(), "saved");
    Ok(Reply::text(format!("File {} saved", file.path().display())))
}

pub fn load(session: &mut Session, args: &Args, today: NaiveDate) -> CommandResult {
    let file = book_file(session, args)?;
    let book = file.load(today)?;
    debug!(path = %file.path().display(), contacts = book.len(), "loaded");
    session.book_mut().replace_with(book);
    Ok(Reply::text(format!("File {} loaded", file.path().display())))
}

pub fn export(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let path = csv_path(session, args);
    store::export_csv(session.book(), &path)?;
    debug!(path = %path.display(), "exported");
    Ok(Reply::text(format!(
        "Exported {} contacts to {}",
        session.book().len(),
        path.display()
    )))
}

pub fn import(session: &mut Session, args: &Args, today: NaiveDate) -> CommandResult {
    let path = csv_path(session, args);
    let imported = store::import_csv(&path, today)?;
    let count = imported.len();
    debug!(path = %path.display(), contacts = count, "imported");
    session.book_mut().extend(imported);
    Ok(Reply::text(format!(
        "Imported {count} contacts from {}",
        path.display()
    )))
}
