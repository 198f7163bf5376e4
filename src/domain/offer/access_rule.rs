//! Access rule catalog.
//!
//! An access rule names a condition on a user's subscription history under
//! which an offer may be subscribed to. The catalog is closed: exactly three
//! kinds exist and each has a fixed catalog id shared with the store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Eligibility rule attached to an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRule {
    /// User has never held an offer.
    FirstSub,

    /// User held an offer before and currently holds none.
    RenewSub,

    /// User currently holds a different offer.
    SwitchSub,
}

impl AccessRule {
    /// Every rule in catalog order.
    pub const ALL: [AccessRule; 3] = [AccessRule::FirstSub, AccessRule::RenewSub, AccessRule::SwitchSub];

    /// Returns the wire/store name of this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRule::FirstSub => "FIRST_SUB",
            AccessRule::RenewSub => "RENEW_SUB",
            AccessRule::SwitchSub => "SWITCH_SUB",
        }
    }

    /// Returns the fixed catalog id of this rule.
    pub fn catalog_id(&self) -> i32 {
        match self {
            AccessRule::FirstSub => 1,
            AccessRule::RenewSub => 2,
            AccessRule::SwitchSub => 3,
        }
    }

    /// Resolves a rule from its catalog id.
    pub fn from_catalog_id(id: i32) -> Result<Self, ValidationError> {
        AccessRule::ALL
            .into_iter()
            .find(|rule| rule.catalog_id() == id)
            .ok_or_else(|| {
                ValidationError::invalid_format("access_rule_ids", format!("unknown access rule id {}", id))
            })
    }
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessRule {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIRST_SUB" => Ok(AccessRule::FirstSub),
            "RENEW_SUB" => Ok(AccessRule::RenewSub),
            "SWITCH_SUB" => Ok(AccessRule::SwitchSub),
            other => Err(ValidationError::invalid_format(
                "access_type",
                format!("unknown access rule '{}'", other),
            )),
        }
    }
}

/// Deduplicated, unordered set of rules governing one offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessRuleSet(BTreeSet<AccessRule>);

impl AccessRuleSet {
    /// Creates an empty rule set (offer open to everyone).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from catalog ids, rejecting unknown ids.
    pub fn from_catalog_ids(ids: &[i32]) -> Result<Self, ValidationError> {
        ids.iter()
            .map(|id| AccessRule::from_catalog_id(*id))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, rule: AccessRule) -> bool {
        self.0.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = AccessRule> + '_ {
        self.0.iter().copied()
    }

    /// Catalog ids of the rules, in catalog order.
    pub fn catalog_ids(&self) -> Vec<i32> {
        self.iter().map(|rule| rule.catalog_id()).collect()
    }
}

impl FromIterator<AccessRule> for AccessRuleSet {
    fn from_iter<I: IntoIterator<Item = AccessRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[AccessRule; N]> for AccessRuleSet {
    fn from(rules: [AccessRule; N]) -> Self {
        rules.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&AccessRule::SwitchSub).unwrap();
        assert_eq!(json, "\"SWITCH_SUB\"");
    }

    #[test]
    fn parses_store_names() {
        for rule in AccessRule::ALL {
            assert_eq!(rule.as_str().parse::<AccessRule>().unwrap(), rule);
        }
        assert!("VIP_SUB".parse::<AccessRule>().is_err());
    }

    #[test]
    fn catalog_ids_are_stable() {
        assert_eq!(AccessRule::FirstSub.catalog_id(), 1);
        assert_eq!(AccessRule::RenewSub.catalog_id(), 2);
        assert_eq!(AccessRule::SwitchSub.catalog_id(), 3);
        assert_eq!(AccessRule::from_catalog_id(2).unwrap(), AccessRule::RenewSub);
    }

    #[test]
    fn unknown_catalog_id_is_rejected() {
        let err = AccessRule::from_catalog_id(9).unwrap_err();
        assert_eq!(err.field(), "access_rule_ids");
    }

    #[test]
    fn rule_set_deduplicates_by_kind() {
        let set = AccessRuleSet::from_catalog_ids(&[3, 1, 3, 1]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.catalog_ids(), vec![1, 3]);
    }

    #[test]
    fn rule_set_rejects_unknown_ids() {
        assert!(AccessRuleSet::from_catalog_ids(&[1, 4]).is_err());
    }

    #[test]
    fn empty_rule_set_contains_nothing() {
        let set = AccessRuleSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(AccessRule::FirstSub));
    }
}
