use crate::domain::{Name, Record};
use crate::error::CoreError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Contacts keyed by name, kept in insertion order.
///
/// Overwriting an existing name keeps the record at its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.records.iter().map(Record::name)
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &Name) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn get_mut(&mut self, name: &Name) -> Option<&mut Record> {
        match self.position(name) {
            Some(index) => Some(&mut self.records[index]),
            None => None,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn get_or_create(&mut self, name: Name) -> &mut Record {
        let index = match self.position(&name) {
            Some(index) => index,
            None => {
                self.records.push(Record::new(name));
                self.records.len() - 1
            }
        };
        &mut self.records[index]
    }

    pub fn remove(&mut self, name: &Name) -> Result<Record, CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn search(&self, needle: &str) -> AddressBook {
        AddressBook {
            records: self
                .records
                .iter()
                .filter(|record| record.matches(needle))
                .cloned()
                .collect(),
        }
    }

    pub fn pages(&self, page_size: usize) -> Result<Pages<'_>, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize(page_size.to_string()));
        }
        Ok(Pages {
            records: &self.records,
            page_size,
            next: 0,
        })
    }

    /// Merges `other` into this book, overwriting records that share a name.
    pub fn extend(&mut self, other: AddressBook) {
        for record in other.records {
            self.add_record(record);
        }
    }

    pub fn replace_with(&mut self, other: AddressBook) {
        self.records = other.records;
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub number: usize,
    pub total: usize,
    pub records: &'a [Record],
    /// Set on every page but the last; interactive consumers pause here.
    pub has_more: bool,
}

/// One pass over an address book in fixed-size pages.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    next: usize,
}

impl<'a> Pages<'a> {
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next * self.page_size;
        if start >= self.records.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.records.len());
        self.next += 1;
        Some(Page {
            number: self.next,
            total: self.page_count(),
            records: &self.records[start..end],
            has_more: end < self.records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::{Birthday, Name, Phone, Record};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).expect("date")
    }

    fn name(raw: &str) -> Name {
        Name::new(raw).expect("name")
    }

    fn contact(raw_name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        Record::with_details(
            name(raw_name),
            phones.iter().map(|p| Phone::new(p).expect("phone")).collect(),
            birthday.map(|b| Birthday::parse(b, today()).expect("birthday")),
        )
    }

    fn book_of(size: usize) -> AddressBook {
        (0..size)
            .map(|index| contact(&format!("Contact{index}"), &[], None))
            .collect()
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ada", &["0501234567"], None));
        book.add_record(contact("Grace", &[], None));
        book.add_record(contact("Ada", &["0677654321"], None));

        assert_eq!(book.len(), 2);
        let names: Vec<_> = book.names().map(|n| n.as_str().to_string()).collect();
        assert_eq!(names, ["Ada", "Grace"]);
        assert_eq!(book.get(&name("Ada")).expect("contact").show_phones(), "0677654321");
    }

    #[test]
    fn get_or_create_reuses_existing_record() {
        let mut book = AddressBook::new();
        book.get_or_create(name("Ada"))
            .add_phone(Phone::new("0501234567").expect("phone"));
        book.get_or_create(name("Ada"))
            .add_phone(Phone::new("0677654321").expect("phone"));

        assert_eq!(book.len(), 1);
        assert_eq!(
            book.get(&name("Ada")).expect("contact").show_phones(),
            "0501234567, 0677654321"
        );
    }

    #[test]
    fn remove_missing_contact_fails() {
        let mut book = AddressBook::new();
        book.add_record(contact("Ada", &[], None));

        let removed = book.remove(&name("Ada")).expect("remove contact");
        assert_eq!(removed.name().as_str(), "Ada");
        assert_eq!(
            book.remove(&name("Ada")),
            Err(CoreError::ContactNotFound("Ada".to_string()))
        );
    }

    #[test]
    fn search_matches_any_field_in_book_order() {
        let book: AddressBook = [
            contact("Ada", &["0501234567"], Some("10.12.1815")),
            contact("Grace", &["0677654321"], Some("09.12.1906")),
            contact("Alan", &[], Some("23.06.1912")),
        ]
        .into_iter()
        .collect();

        let by_name = book.search("A");
        let names: Vec<_> = by_name.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Ada", "Alan"]);

        let by_phone = book.search("7654");
        assert_eq!(by_phone.len(), 1);
        assert!(by_phone.contains(&name("Grace")));

        let by_birthday = book.search(".12.");
        let names: Vec<_> = by_birthday.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace"]);

        assert!(book.search("nobody").is_empty());
        assert_eq!(book.search(""), book);
    }

    #[test]
    fn pages_cover_book_in_order() {
        for (size, page_size) in [(0, 3), (1, 3), (3, 3), (7, 3), (10, 10), (25, 10), (5, 1)] {
            let book = book_of(size);
            let pages: Vec<_> = book.pages(page_size).expect("pages").collect();

            assert_eq!(pages.len(), size.div_ceil(page_size));
            assert!(pages.iter().all(|page| page.records.len() <= page_size));

            let flattened: Vec<_> = pages.iter().flat_map(|page| page.records.iter()).collect();
            let original: Vec<_> = book.iter().collect();
            assert_eq!(flattened, original);

            for (index, page) in pages.iter().enumerate() {
                assert_eq!(page.number, index + 1);
                assert_eq!(page.total, pages.len());
                assert_eq!(page.has_more, index + 1 < pages.len());
            }
        }
    }

    #[test]
    fn pages_restart_on_each_call() {
        let book = book_of(4);
        assert_eq!(book.pages(3).expect("pages").count(), 2);
        assert_eq!(book.pages(3).expect("pages").count(), 2);
    }

    #[test]
    fn pages_reject_zero_size() {
        let book = book_of(2);
        assert!(matches!(book.pages(0), Err(CoreError::InvalidPageSize(_))));
    }

    #[test]
    fn extend_merges_by_name() {
        let mut book: AddressBook = [contact("Ada", &[], None), contact("Grace", &[], None)]
            .into_iter()
            .collect();
        let incoming: AddressBook = [
            contact("Grace", &["0677654321"], None),
            contact("Alan", &[], None),
        ]
        .into_iter()
        .collect();

        book.extend(incoming);

        let names: Vec<_> = book.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace", "Alan"]);
        assert_eq!(book.get(&name("Grace")).expect("contact").show_phones(), "0677654321");
    }
}
