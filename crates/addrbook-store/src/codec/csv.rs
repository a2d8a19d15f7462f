//! Semicolon separated table with a `name;phones;birthday` header.
//!
//! Phones are joined with `", "` inside one field, so the delimiter is `;`. A contact without
//! phones or without a birthday gets [`PLACEHOLDER`] in that column.

use crate::error::{Result, StoreError};
use addrbook_core::{AddressBook, Birthday, Name, Phone, Record, PLACEHOLDER};
use chrono::NaiveDate;
use std::path::Path;

pub const DELIMITER: char = ';';
pub const HEADER: [&str; 3] = ["name", "phones", "birthday"];

pub fn encode(book: &AddressBook) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADER);
    for record in book {
        let phones = record.show_phones();
        let birthday = record.show_birthday();
        push_row(&mut out, &[record.name().as_str(), phones.as_str(), birthday.as_str()]);
    }
    out
}

pub fn decode(data: &str, path: &Path, today: NaiveDate) -> Result<AddressBook> {
    let rows = split_rows(data).map_err(|reason| StoreError::malformed(path, reason))?;
    let mut rows = rows.into_iter();

    match rows.next() {
        Some(header) if is_header(&header.fields) => {}
        Some(header) => {
            return Err(StoreError::malformed(
                path,
                format!("line {}: expected header {}", header.line, HEADER.join(";")),
            ))
        }
        None => return Err(StoreError::malformed(path, "missing header")),
    }

    let mut book = AddressBook::new();
    for row in rows {
        let record = parse_record(&row, today)
            .map_err(|reason| StoreError::malformed(path, format!("line {}: {reason}", row.line)))?;
        if book.contains(record.name()) {
            return Err(StoreError::malformed(
                path,
                format!("line {}: duplicate contact {}", row.line, record.name()),
            ));
        }
        book.add_record(record);
    }
    Ok(book)
}

fn is_header(fields: &[String]) -> bool {
    fields.len() == HEADER.len()
        && fields
            .iter()
            .zip(HEADER)
            .all(|(field, expected)| field.trim().eq_ignore_ascii_case(expected))
}

fn parse_record(row: &Row, today: NaiveDate) -> std::result::Result<Record, String> {
    let [name, phones, birthday] = row.fields.as_slice() else {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            row.fields.len()
        ));
    };

    let name = Name::new(name).map_err(|err| err.to_string())?;

    let phones = match optional_field(phones) {
        None => Vec::new(),
        Some(value) => value
            .split(',')
            .map(|raw| Phone::new(raw.trim()).map_err(|err| err.to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };

    let birthday = optional_field(birthday)
        .map(|raw| Birthday::parse(raw, today).map_err(|err| err.to_string()))
        .transpose()?;

    Ok(Record::with_details(name, phones, birthday))
}

fn optional_field(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        None
    } else {
        Some(trimmed)
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(DELIMITER);
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|ch| ch == DELIMITER || ch == '"' || ch == '\n' || ch == '\r');
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[derive(Debug)]
struct Row {
    line: usize,
    fields: Vec<String>,
}

fn split_rows(data: &str) -> std::result::Result<Vec<Row>, String> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut quote_line = 1;

    let mut chars = data.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            DELIMITER => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                finish_row(&mut rows, row_line, std::mem::take(&mut fields));
                line += 1;
                row_line = line;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(format!("line {quote_line}: unterminated quoted field"));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        finish_row(&mut rows, row_line, fields);
    }
    Ok(rows)
}

fn finish_row(rows: &mut Vec<Row>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        rows.push(Row { line, fields });
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, split_rows};
    use crate::error::StoreError;
    use addrbook_core::{AddressBook, Birthday, Name, Phone, Record};
    use chrono::NaiveDate;
    use std::path::Path;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).expect("date")
    }

    fn reason(err: StoreError) -> String {
        match err {
            StoreError::Malformed { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encode_uses_placeholders() {
        let mut book = AddressBook::new();
        book.add_record(Record::with_details(
            Name::new("Ann").expect("name"),
            vec![
                Phone::new("0501234567").expect("phone"),
                Phone::new("0677654321").expect("phone"),
            ],
            Some(Birthday::parse("01.01.2000", today()).expect("birthday")),
        ));
        book.add_record(Record::new(Name::new("Bob").expect("name")));

        assert_eq!(
            encode(&book),
            "name;phones;birthday\nAnn;0501234567, 0677654321;01.01.2000\nBob;-;-\n"
        );
    }

    #[test]
    fn encode_quotes_awkward_names() {
        let mut book = AddressBook::new();
        book.add_record(Record::new(Name::new("Ann; \"The\" Admin").expect("name")));
        let text = encode(&book);
        assert!(text.contains("\"Ann; \"\"The\"\" Admin\";-;-"), "{text}");

        let decoded = decode(&text, Path::new("book.csv"), today()).expect("decode");
        assert_eq!(decoded, book);
    }

    #[test]
    fn decode_treats_placeholder_as_absent() {
        let data = "name;phones;birthday\nBob;-;-\nAnn;0501234567;01.01.2000\n";
        let book = decode(data, Path::new("book.csv"), today()).expect("decode");

        let bob = book.get(&Name::new("Bob").expect("name")).expect("contact");
        assert!(bob.phones().is_empty());
        assert!(bob.birthday().is_none());

        let ann = book.get(&Name::new("Ann").expect("name")).expect("contact");
        assert_eq!(ann.show_phones(), "0501234567");
        assert_eq!(ann.show_birthday(), "01.01.2000");
    }

    #[test]
    fn decode_accepts_crlf_and_blank_lines() {
        let data = "Name;Phones;Birthday\r\n\r\nBob;-;-\r\n";
        let book = decode(data, Path::new("book.csv"), today()).expect("decode");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn decode_requires_header() {
        let err = decode("Bob;-;-\n", Path::new("book.csv"), today())
            .expect_err("decode should fail");
        assert!(reason(err).contains("expected header"));

        let err = decode("", Path::new("book.csv"), today()).expect_err("decode should fail");
        assert_eq!(reason(err), "missing header");
    }

    #[test]
    fn decode_reports_line_numbers() {
        let data = "name;phones;birthday\nBob;-;-\nAnn;123;-\n";
        let err = decode(data, Path::new("book.csv"), today()).expect_err("decode should fail");
        assert_eq!(reason(err), "line 3: Phone number must be 10 digits");

        let data = "name;phones;birthday\nBob;-\n";
        let err = decode(data, Path::new("book.csv"), today()).expect_err("decode should fail");
        assert_eq!(reason(err), "line 2: expected 3 fields, found 2");
    }

    #[test]
    fn split_rows_tracks_multiline_quotes() {
        let rows = split_rows("a;\"b\nc\";d\ne;f;g\n").expect("split rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, ["a", "b\nc", "d"]);
        assert_eq!(rows[1].line, 3);

        let err = split_rows("a;\"open\n").expect_err("split rows should fail");
        assert_eq!(err, "line 1: unterminated quoted field");
    }
}
