use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use crate::rules::dates::days_until_next;
use chrono::NaiveDate;

/// Shown in place of an empty phone list or a missing birthday.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_details(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> Result<Phone, CoreError> {
        let index = self
            .phones
            .iter()
            .position(|existing| existing == phone)
            .ok_or_else(|| CoreError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })?;
        Ok(self.phones.remove(index))
    }

    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|existing| *existing == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|birthday| days_until_next(birthday.date(), today))
    }

    pub fn show_phones(&self) -> String {
        if self.phones.is_empty() {
            return PLACEHOLDER.to_string();
        }
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Case-sensitive substring match over the name, every phone and the birthday.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.as_str().contains(needle)
            || self.phones.iter().any(|phone| phone.as_str().contains(needle))
            || self
                .birthday
                .is_some_and(|birthday| birthday.to_string().contains(needle))
    }
}
