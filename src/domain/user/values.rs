//! Profile value objects.
//!
//! Each type validates on construction so a `User` can only ever hold
//! well-formed profile data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const MAX_EMAIL_LEN: usize = 255;
const MAX_NAME_LEN: usize = 100;
const MIN_AGE: i32 = 1;
const MAX_AGE: i32 = 150;

/// Email address, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let email = raw.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ValidationError::too_long("email", MAX_EMAIL_LEN, email.chars().count()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(Self(email))
            }
            _ => Err(ValidationError::invalid_format("email", "expected local@domain")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// First or last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(field: &str, raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::too_long(field, MAX_NAME_LEN, len));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age in years, 1 through 150.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Age(i32);

impl Age {
    pub fn new(years: i32) -> Result<Self, ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&years) {
            return Err(ValidationError::out_of_range(
                "age",
                MIN_AGE as i64,
                MAX_AGE as i64,
                years as i64,
            ));
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Age {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for i32 {
    fn from(age: Age) -> Self {
        age.0
    }
}

/// Declared gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::NonBinary => "NON_BINARY",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "NON_BINARY" => Ok(Gender::NonBinary),
            other => Err(ValidationError::invalid_format(
                "gender",
                format!("'{}' is not one of MALE, FEMALE, NON_BINARY", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_to_lowercase() {
        let email = Email::new("  Ada@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(Email::new("ada").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("ada@").is_err());
        assert!(Email::new("a@b@c").is_err());
        assert_eq!(Email::new("").unwrap_err(), ValidationError::empty_field("email"));
    }

    #[test]
    fn email_rejects_overlong_address() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(Email::new(raw), Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(PersonName::new("firstname", " Ada ").unwrap().as_str(), "Ada");
        assert_eq!(
            PersonName::new("lastname", "  ").unwrap_err(),
            ValidationError::empty_field("lastname")
        );
        assert!(PersonName::new("lastname", "x".repeat(101)).is_err());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(Age::new(0).is_err());
        assert_eq!(Age::new(1).unwrap().years(), 1);
        assert_eq!(Age::new(150).unwrap().years(), 150);
        assert!(Age::new(151).is_err());
    }

    #[test]
    fn gender_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&Gender::NonBinary).unwrap(), "\"NON_BINARY\"");
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("female".parse::<Gender>().is_err());
    }
}
