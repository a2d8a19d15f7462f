use crate::error::{Argument, CommandError};
use crate::grammar::Args;
use crate::render::Table;
use crate::session::Session;
use addrbook_core::{AddressBook, CoreError, Name};
use chrono::NaiveDate;

pub mod contacts;
pub mod files;
pub mod listing;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const UNKNOWN_COMMAND: &str = "What do you mean?";

pub type CommandResult = Result<Reply, CommandError>;

/// Signature shared by every entry of the dispatch table.
pub type Handler = fn(&mut Session, &Args, NaiveDate) -> CommandResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Table(Table),
    Listing(Listing),
    Exit(String),
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Reply::Text(message.into())
    }
}

/// A set of contacts to show page by page, followed by a summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub book: AddressBook,
    pub page_size: usize,
    pub summary: String,
}

pub fn hello(_session: &mut Session, _args: &Args, _today: NaiveDate) -> CommandResult {
    Ok(Reply::text(GREETING))
}

pub fn good_bye(session: &mut Session, _args: &Args, _today: NaiveDate) -> CommandResult {
    session.save()?;
    Ok(Reply::Exit(FAREWELL.to_string()))
}

pub fn unknown(_session: &mut Session, _args: &Args, _today: NaiveDate) -> CommandResult {
    Ok(Reply::text(UNKNOWN_COMMAND))
}

pub(crate) fn required<'a>(
    args: &'a Args,
    index: usize,
    argument: Argument,
) -> Result<&'a str, CommandError> {
    args.get(index)
        .ok_or(CommandError::MissingArgument(argument))
}

pub(crate) fn name_at(args: &Args, index: usize) -> Result<Name, CommandError> {
    Ok(Name::new(required(args, index, Argument::Name)?)?)
}

/// Optional page size token; absent means the session default.
pub(crate) fn page_size_at(
    args: &Args,
    index: usize,
    default: usize,
) -> Result<usize, CommandError> {
    match args.get(index) {
        None => Ok(default),
        Some(raw) => match raw.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(CoreError::InvalidPageSize(raw.to_string()).into()),
        },
    }
}
