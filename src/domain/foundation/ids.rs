//! Strongly-typed identifier value objects.
//!
//! Both identifiers wrap the integer primary keys assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a UserId from a store-assigned key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a subscription offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(i64);

impl OfferId {
    /// Creates an OfferId from a store-assigned key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OfferId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for OfferId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_from_string() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn user_id_rejects_non_numeric_string() {
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn offer_id_serializes_transparently() {
        let json = serde_json::to_string(&OfferId::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: OfferId = serde_json::from_str("7").unwrap();
        assert_eq!(back, OfferId::new(7));
    }

    #[test]
    fn offer_ids_compare_by_value() {
        assert_eq!(OfferId::from(3), OfferId::new(3));
        assert_ne!(OfferId::new(3), OfferId::new(4));
    }
}
