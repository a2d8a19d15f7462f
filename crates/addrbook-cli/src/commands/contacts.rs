use super::{name_at, required, CommandResult, Reply};
use crate::error::{Argument, CommandError, Missing};
use crate::grammar::Args;
use crate::render::Table;
use crate::session::Session;
use addrbook_core::{Birthday, Name, Phone, Record};
use chrono::NaiveDate;

pub fn add(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    let phone = Phone::new(required(args, 1, Argument::Phone)?)?;
    session
        .book_mut()
        .get_or_create(name.clone())
        .add_phone(phone.clone());
    Ok(Reply::text(format!("I added a phone {phone} to contact {name}")))
}

pub fn change(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    let old = Phone::new(required(args, 1, Argument::OldPhone)?)?;
    let new = Phone::new(required(args, 2, Argument::NewPhone)?)?;
    let record = existing_mut(session, &name)?;
    if !record.change_phone(&old, new.clone()) {
        return Err(CommandError::NotFound(Missing::Phone {
            name: name.to_string(),
            phone: old.to_string(),
        }));
    }
    Ok(Reply::text(format!(
        "Contact {name} with phone number {old} was updated with new phone number {new}"
    )))
}

pub fn remove(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    match args.get(1) {
        None => {
            session.book_mut().remove(&name)?;
            Ok(Reply::text(format!("Contact {name} was removed")))
        }
        Some(raw) => {
            let phone = Phone::new(raw)?;
            existing_mut(session, &name)?.remove_phone(&phone)?;
            Ok(Reply::text(format!(
                "Phone {phone} was removed from contact {name}"
            )))
        }
    }
}

pub fn set_birthday(session: &mut Session, args: &Args, today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    let birthday = Birthday::parse(required(args, 1, Argument::Birthday)?, today)?;
    session
        .book_mut()
        .get_or_create(name.clone())
        .add_birthday(birthday);
    Ok(Reply::text(format!(
        "I added a birthday {birthday} to contact {name}"
    )))
}

pub fn birthday_of(session: &mut Session, args: &Args, today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    let record = existing(session, &name)?;
    let days = record
        .days_to_birthday(today)
        .ok_or_else(|| CommandError::NoBirthday(name.to_string()))?;
    let table = Table::new(["Name", "Birthday", "Days to next Birthday"]).row([
        name.to_string(),
        record.show_birthday(),
        days.to_string(),
    ]);
    Ok(Reply::Table(table))
}

pub fn phones_of(session: &mut Session, args: &Args, _today: NaiveDate) -> CommandResult {
    let name = name_at(args, 0)?;
    let record = existing(session, &name)?;
    let table = Table::new(["Name", "Phones"]).row([name.to_string(), record.show_phones()]);
    Ok(Reply::Table(table))
}

fn existing<'a>(session: &'a Session, name: &Name) -> Result<&'a Record, CommandError> {
    session
        .book()
        .get(name)
        .ok_or_else(|| CommandError::NotFound(Missing::Contact(name.to_string())))
}

fn existing_mut<'a>(session: &'a mut Session, name: &Name) -> Result<&'a mut Record, CommandError> {
    session
        .book_mut()
        .get_mut(name)
        .ok_or_else(|| CommandError::NotFound(Missing::Contact(name.to_string())))
}
