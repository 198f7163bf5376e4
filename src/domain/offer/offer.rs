//! Offer entity and its write models.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OfferId, ValidationError};

use super::AccessRuleSet;

/// Longest accepted offer title.
pub const MAX_TITLE_LEN: usize = 255;

/// Monthly price in whole currency units; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Price(i32);

impl Price {
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::out_of_range("price", 1, i32::MAX as i64, value as i64));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Price {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for i32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// A subscription offer together with the rules governing access to it.
///
/// Offers are read-only from the point of view of subscription transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub benefits: String,
    pub access_rules: AccessRuleSet,
}

/// Validated fields for a new offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub benefits: String,
    pub access_rules: AccessRuleSet,
}

impl NewOffer {
    /// Validates raw input into a new offer.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: i32,
        benefits: impl Into<String>,
        access_rules: AccessRuleSet,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(title.into())?,
            description: description.into(),
            price: Price::new(price)?,
            benefits: benefits.into(),
            access_rules,
        })
    }

    /// Attaches a store-assigned id.
    pub fn into_offer(self, id: OfferId) -> Offer {
        Offer {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            benefits: self.benefits,
            access_rules: self.access_rules,
        }
    }
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub benefits: Option<String>,
    pub access_rules: Option<AccessRuleSet>,
}

impl OfferUpdate {
    /// Validates raw patch input.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        price: Option<i32>,
        benefits: Option<String>,
        access_rules: Option<AccessRuleSet>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.map(validate_title).transpose()?,
            description,
            price: price.map(Price::new).transpose()?,
            benefits,
            access_rules,
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &OfferUpdate::default()
    }

    /// Applies the patch to an existing offer.
    pub fn apply_to(self, offer: &mut Offer) {
        if let Some(title) = self.title {
            offer.title = title;
        }
        if let Some(description) = self.description {
            offer.description = description;
        }
        if let Some(price) = self.price {
            offer.price = price;
        }
        if let Some(benefits) = self.benefits {
            offer.benefits = benefits;
        }
        if let Some(rules) = self.access_rules {
            offer.access_rules = rules;
        }
    }
}

fn validate_title(title: String) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::too_long("title", MAX_TITLE_LEN, len));
    }
    Ok(trimmed.to_string())
}
