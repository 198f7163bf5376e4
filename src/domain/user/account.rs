//! User account entity.

use crate::domain::foundation::{OfferId, UserId};
use crate::domain::subscription::SubscriptionState;

use super::{Age, Email, Gender, PersonName};

/// A registered user.
///
/// # Invariants
///
/// - `email` is unique across users (enforced by the store)
/// - `subscription` is only changed by subscription transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub age: Age,
    pub gender: Gender,
    pub password_hash: String,
    pub subscription: SubscriptionState,
}

impl User {
    /// The offer the user is subscribed to, if any.
    pub fn current_offer(&self) -> Option<OfferId> {
        self.subscription.current_offer
    }

    /// The offer the user held before the current one, if any.
    pub fn previous_offer(&self) -> Option<OfferId> {
        self.subscription.previous_offer
    }
}

/// Validated fields for a new account; the password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Email,
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub age: Age,
    pub gender: Gender,
    pub password_hash: String,
}

impl NewUser {
    /// Attaches a store-assigned id. New accounts hold no offers.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            firstname: self.firstname,
            lastname: self.lastname,
            age: self.age,
            gender: self.gender,
            password_hash: self.password_hash,
            subscription: SubscriptionState::default(),
        }
    }
}

/// Profile patch. Subscription fields are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub email: Option<Email>,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub age: Option<Age>,
    pub gender: Option<Gender>,
    pub password_hash: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self == &UserUpdate::default()
    }

    /// Applies the patch to an existing user.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(firstname) = self.firstname {
            user.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            user.lastname = lastname;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(hash) = self.password_hash {
            user.password_hash = hash;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            email: Email::new("ada@example.com").unwrap(),
            firstname: PersonName::new("firstname", "Ada").unwrap(),
            lastname: PersonName::new("lastname", "Lovelace").unwrap(),
            age: Age::new(36).unwrap(),
            gender: Gender::Female,
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn new_user_starts_without_offers() {
        let user = new_user().into_user(UserId::new(1));
        assert_eq!(user.current_offer(), None);
        assert_eq!(user.previous_offer(), None);
    }

    #[test]
    fn update_leaves_subscription_untouched() {
        let mut user = new_user().into_user(UserId::new(1));
        user.subscription = SubscriptionState::new(Some(OfferId::new(3)), Some(OfferId::new(1)));

        let update = UserUpdate {
            age: Some(Age::new(37).unwrap()),
            ..UserUpdate::default()
        };
        update.apply_to(&mut user);

        assert_eq!(user.age.years(), 37);
        assert_eq!(user.current_offer(), Some(OfferId::new(3)));
        assert_eq!(user.previous_offer(), Some(OfferId::new(1)));
    }

    #[test]
    fn default_update_is_empty() {
        assert!(UserUpdate::default().is_empty());
    }
}
