//! JSON object keyed by contact name, in book order:
//!
//! ```json
//! {
//!     "Ann": {
//!         "phones": ["0501234567"],
//!         "birthday": "01.01.2000"
//!     }
//! }
//! ```

use crate::error::{Result, StoreError};
use addrbook_core::{AddressBook, Birthday, Name, Phone, Record};
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

#[derive(Serialize)]
struct EntryRef<'a> {
    phones: &'a [Phone],
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

struct BookRef<'a>(&'a AddressBook);

impl Serialize for BookRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in self.0 {
            let entry = EntryRef {
                phones: record.phones(),
                birthday: record.birthday().map(ToString::to_string),
            };
            map.serialize_entry(record.name().as_str(), &entry)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct Entry {
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<String>,
}

struct Entries(Vec<(Name, Entry)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of contacts keyed by name")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, entry)) = access.next_entry::<Name, Entry>()? {
                    entries.push((name, entry));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

pub fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    BookRef(book).serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

pub fn decode(data: &str, path: &Path, today: NaiveDate) -> Result<AddressBook> {
    let entries: Entries =
        serde_json::from_str(data).map_err(|err| StoreError::malformed(path, err.to_string()))?;

    let mut book = AddressBook::new();
    for (name, entry) in entries.0 {
        if book.contains(&name) {
            return Err(StoreError::malformed(path, format!("duplicate contact {name}")));
        }
        let birthday = entry
            .birthday
            .as_deref()
            .map(|raw| Birthday::parse(raw, today))
            .transpose()
            .map_err(|err| StoreError::malformed(path, format!("birthday of {name}: {err}")))?;
        book.add_record(Record::with_details(name, entry.phones, birthday));
    }
    Ok(book)
}
