use crate::commands::{self, contacts, files, listing, Handler, Reply};
use crate::grammar::{self, Args, CommandKind};
use crate::session::Session;
use chrono::NaiveDate;
use tracing::debug;

const HANDLERS: &[(CommandKind, Handler)] = &[
    (CommandKind::Hello, commands::hello),
    (CommandKind::Add, contacts::add),
    (CommandKind::Change, contacts::change),
    (CommandKind::Remove, contacts::remove),
    (CommandKind::SetBirthday, contacts::set_birthday),
    (CommandKind::BirthdayOf, contacts::birthday_of),
    (CommandKind::PhonesOf, contacts::phones_of),
    (CommandKind::ShowAll, listing::show_all),
    (CommandKind::Search, listing::search),
    (CommandKind::Save, files::save),
    (CommandKind::Load, files::load),
    (CommandKind::Export, files::export),
    (CommandKind::Import, files::import),
    (CommandKind::Exit, commands::good_bye),
];

pub fn handler_for(kind: CommandKind) -> Handler {
    HANDLERS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, handler)| *handler)
        .unwrap_or(commands::unknown)
}

/// Runs one input line against the session. Handler failures come back as text replies.
pub fn dispatch(session: &mut Session, line: &str, today: NaiveDate) -> Reply {
    let outcome = match grammar::parse_line(line) {
        Some(parsed) => {
            debug!(command = %parsed.keyword, args = parsed.args.len(), "dispatch");
            handler_for(parsed.kind)(session, &parsed.args, today)
        }
        None => commands::unknown(session, &Args::default(), today),
    };
    outcome.unwrap_or_else(|err| Reply::Text(err.to_string()))
}
