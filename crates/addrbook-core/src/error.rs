use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),
    #[error("Birthday should be in format DD.MM.YYYY")]
    InvalidBirthdayFormat(String),
    #[error("Birthday is not a real calendar date")]
    InvalidBirthdayDate(String),
    #[error("Birthday cannot be in the future")]
    BirthdayInFuture(String),
    #[error("Page size must be a positive number")]
    InvalidPageSize(String),
    #[error("Contact {0} not found")]
    ContactNotFound(String),
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },
}
