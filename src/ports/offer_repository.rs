//! Offer repository port.
//!
//! Offers are always returned with their access rules resolved, so callers
//! never see an offer without its rule set.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OfferId};
use crate::domain::offer::{NewOffer, Offer};

/// Repository port for offers and their rule associations.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Find an offer by id, with its rule set.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, DomainError>;

    /// List offers ordered by id.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Offer>, DomainError>;

    /// Count stored offers.
    async fn count(&self) -> Result<i64, DomainError>;

    /// Insert an offer together with its rule associations.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, offer: &NewOffer) -> Result<Offer, DomainError>;

    /// Replace an offer's fields and rule set.
    ///
    /// # Errors
    ///
    /// - `OfferNotFound` if the offer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, offer: &Offer) -> Result<(), DomainError>;

    /// Delete an offer and its rule associations.
    ///
    /// # Errors
    ///
    /// - `OfferNotFound` if the offer doesn't exist
    /// - `OfferInUse` if a user still references it
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: OfferId) -> Result<(), DomainError>;
}
