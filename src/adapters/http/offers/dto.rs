//! Request and response bodies for offer endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::offer::{AccessRule, Offer};

/// One access rule as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRuleResponse {
    pub id: i32,
    pub access_type: AccessRule,
}

impl From<AccessRule> for AccessRuleResponse {
    fn from(rule: AccessRule) -> Self {
        Self {
            id: rule.catalog_id(),
            access_type: rule,
        }
    }
}

/// Offer with its rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: i32,
    pub benefits: String,
    pub access_rules: Vec<AccessRuleResponse>,
}

impl From<&Offer> for OfferResponse {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id.as_i64(),
            title: offer.title.clone(),
            description: offer.description.clone(),
            price: offer.price.value(),
            benefits: offer.benefits.clone(),
            access_rules: offer.access_rules.iter().map(AccessRuleResponse::from).collect(),
        }
    }
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self::from(&offer)
    }
}

/// Body of `POST /offers`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: String,
    pub price: i32,
    pub benefits: String,
    #[serde(default)]
    pub access_rule_ids: Option<Vec<i32>>,
}

/// Body of `PATCH /offers/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOfferRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub benefits: Option<String>,
    /// Replaces the whole rule set when present.
    pub access_rule_ids: Option<Vec<i32>>,
}
