//! Default offer catalog installed on an empty store.

use crate::domain::foundation::ValidationError;

use super::{AccessRule, AccessRuleSet, NewOffer};

/// The three offers every fresh deployment starts with.
///
/// Starter is only for first-time subscribers, Standard also welcomes
/// returning subscribers, and Premium is reachable from any history.
pub fn default_catalog() -> Result<Vec<NewOffer>, ValidationError> {
    Ok(vec![
        NewOffer::new(
            "Offre Starter",
            "Un forfait abordable pour tous les portefeuilles",
            10,
            "Appels illimités, 300 SMS",
            AccessRuleSet::from([AccessRule::FirstSub]),
        )?,
        NewOffer::new(
            "Offre Standard",
            "La solution idéale pour communiquer sans limite avec vos proches",
            15,
            "Appels illimités, SMS illimités",
            AccessRuleSet::from([AccessRule::FirstSub, AccessRule::RenewSub]),
        )?,
        NewOffer::new(
            "Offre Premium",
            "Le choix parfait pour les grands voyageurs",
            20,
            "Appels illimités, SMS illimités, ROAMING en Europe",
            AccessRuleSet::from(AccessRule::ALL),
        )?,
    ])
}
