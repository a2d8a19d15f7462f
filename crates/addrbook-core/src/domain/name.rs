use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contact name; the unique key of a record inside an address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::Name;
    use crate::error::CoreError;

    #[test]
    fn name_trims_whitespace() {
        let name = Name::new("  Ada ").expect("name");
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn name_accepts_digits_and_dots() {
        assert!(Name::new("John1234567").is_ok());
        assert!(Name::new("J.R.R.").is_ok());
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(Name::new("   "), Err(CoreError::EmptyName));
        assert_eq!(Name::new(""), Err(CoreError::EmptyName));
    }
}
