use crate::commands::{Listing, Reply, FAREWELL};
use crate::dispatcher::dispatch;
use crate::error::CommandError;
use crate::render;
use crate::session::Session;
use addrbook_core::local_today;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::warn;

pub const PROMPT: &str = ">>> ";
pub const CONTINUE_PROMPT: &str = "Press <Enter> to continue...";
pub const BANNER: &str = "Address book is ready. Type `hello` to start or `exit` to save and leave.";

#[derive(Debug, Clone, Copy)]
pub struct ReplOptions {
    /// Wait for <Enter> between pages of a listing.
    pub pause_between_pages: bool,
    pub today: fn() -> NaiveDate,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            pause_between_pages: false,
            today: local_today,
        }
    }
}

pub struct Repl<'s, R, W> {
    session: &'s mut Session,
    input: R,
    output: W,
    options: ReplOptions,
}

impl<'s, R: BufRead, W: Write> Repl<'s, R, W> {
    pub fn new(session: &'s mut Session, input: R, output: W, options: ReplOptions) -> Self {
        Self {
            session,
            input,
            output,
            options,
        }
    }

    /// Reads commands until a terminator or end of input.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return self.finish();
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match dispatch(self.session, line, (self.options.today)()) {
                Reply::Exit(message) => {
                    writeln!(self.output, "{message}")?;
                    return Ok(());
                }
                Reply::Text(message) => writeln!(self.output, "{message}")?,
                Reply::Table(table) => write!(self.output, "{table}")?,
                Reply::Listing(listing) => self.show_listing(&listing)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show_listing(&mut self, listing: &Listing) -> io::Result<()> {
        let pages = match listing.book.pages(listing.page_size) {
            Ok(pages) => pages,
            Err(err) => return writeln!(self.output, "{}", CommandError::from(err)),
        };
        for page in pages {
            write!(self.output, "{}", render::page(&page))?;
            if page.has_more && self.options.pause_between_pages {
                write!(self.output, "{CONTINUE_PROMPT}")?;
                self.output.flush()?;
                if self.read_line()?.is_none() {
                    writeln!(self.output)?;
                    break;
                }
            }
        }
        writeln!(self.output, "{}", listing.summary)
    }

    /// End of input saves like an explicit terminator; a failed save is logged, not fatal.
    fn finish(mut self) -> io::Result<()> {
        if let Err(err) = self.session.save() {
            warn!(
                path = %self.session.book_path().display(),
                error = %err,
                "could not save address book on exit"
            );
            writeln!(self.output, "{}", CommandError::from(err))?;
        }
        writeln!(self.output, "{FAREWELL}")
    }
}
