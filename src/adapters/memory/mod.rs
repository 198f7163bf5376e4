//! In-memory adapters for testing and local development.

mod offer_repository;
mod token_blacklist;
mod user_repository;

pub use offer_repository::InMemoryOfferRepository;
pub use token_blacklist::InMemoryTokenBlacklist;
pub use user_repository::InMemoryUserRepository;
