//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `OfferRepository` - Offers with their access rules
//! - `UserRepository` - Accounts and subscription state
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` / `TokenIssuer` - Session tokens
//! - `TokenBlacklist` - Tokens revoked by logout
//! - `PasswordHasher` - Credential hashing

mod offer_repository;
mod password_hasher;
mod session_validator;
mod token_blacklist;
mod user_repository;

pub use offer_repository::OfferRepository;
pub use password_hasher::PasswordHasher;
pub use session_validator::{IssuedToken, SessionClaims, SessionValidator, TokenIssuer};
pub use token_blacklist::TokenBlacklist;
pub use user_repository::UserRepository;
