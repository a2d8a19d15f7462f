//! Binary snapshot: a small SQLite database holding contacts and their phones.

use crate::db;
use crate::error::{Result, StoreError};
use crate::fs::temp_path;
use crate::paths;
use crate::schema;
use addrbook_core::{AddressBook, Birthday, Name, Phone, Record};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;

pub fn write(book: &AddressBook, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let tmp = temp_path(path);
    if tmp.exists() {
        fs::remove_file(&tmp)?;
    }
    if let Err(err) = write_into(book, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path)?;
    db::restrict_db_permissions(path)?;
    Ok(())
}

pub fn read(path: &Path, today: NaiveDate) -> Result<AddressBook> {
    let outcome = db::open_read_only(path).and_then(|conn| read_from(&conn, path, today));
    outcome.map_err(|err| match err {
        StoreError::Sql(source) => StoreError::malformed(path, source.to_string()),
        StoreError::Schema(reason) => StoreError::malformed(path, reason),
        other => other,
    })
}

fn write_into(book: &AddressBook, path: &Path) -> Result<()> {
    let mut conn = db::open(path)?;
    let tx = conn.transaction()?;
    schema::create(&tx)?;
    {
        let mut insert_contact =
            tx.prepare("INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3);")?;
        let mut insert_phone = tx.prepare(
            "INSERT INTO phones (contact_position, position, number) VALUES (?1, ?2, ?3);",
        )?;
        for (position, record) in book.iter().enumerate() {
            let position = position as i64;
            insert_contact.execute(params![
                position,
                record.name().as_str(),
                record.birthday().map(ToString::to_string),
            ])?;
            for (index, phone) in record.phones().iter().enumerate() {
                insert_phone.execute(params![position, index as i64, phone.as_str()])?;
            }
        }
    }
    tx.commit()?;
    Ok(())
}

fn read_from(conn: &Connection, path: &Path, today: NaiveDate) -> Result<AddressBook> {
    schema::ensure_current(conn)?;

    let mut contacts =
        conn.prepare("SELECT position, name, birthday FROM contacts ORDER BY position;")?;
    let rows = contacts
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut phones_stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_position = ?1 ORDER BY position;",
    )?;

    let mut book = AddressBook::new();
    for (position, raw_name, raw_birthday) in rows {
        let name = Name::new(&raw_name)
            .map_err(|err| StoreError::malformed(path, format!("contact #{position}: {err}")))?;
        if book.contains(&name) {
            return Err(StoreError::malformed(path, format!("duplicate contact {name}")));
        }

        let numbers = phones_stmt
            .query_map([position], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let phones = numbers
            .iter()
            .map(|number| Phone::new(number))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| StoreError::malformed(path, format!("phones of {name}: {err}")))?;

        let birthday = raw_birthday
            .as_deref()
            .map(|raw| Birthday::parse(raw, today))
            .transpose()
            .map_err(|err| StoreError::malformed(path, format!("birthday of {name}: {err}")))?;

        book.add_record(Record::with_details(name, phones, birthday));
    }
    Ok(book)
}
