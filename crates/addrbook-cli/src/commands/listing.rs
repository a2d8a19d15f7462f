use super::{page_size_at, required, CommandResult, Listing, Reply};
use crate::error::Argument;
use crate::grammar::Args;
use crate::session::Session;
use chrono::NaiveDate;

pub fn show_all(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let page_size = page_size_at(args, 0, session.page_size())?;
    let book = session.book().clone();
    let summary = format!("Address book contain {} contacts", book.len());
    Ok(Reply::Listing(Listing {
        book,
        page_size,
        summary,
    }))
}

pub fn search(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let query = required(args, 0, Argument::Query)?;
    let page_size = page_size_at(args, 1, session.page_size())?;
    let book = session.book().search(query);
    let summary = format!("Found {} contacts matching '{query}'", book.len());
    Ok(Reply::Listing(Listing {
        book,
        page_size,
        summary,
    }))
}
