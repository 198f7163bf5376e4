//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOfferRepository` - Offers and their access-rule links
//! - `PostgresUserRepository` - Accounts and subscription state
//!
//! Schema lives in `migrations/` and is applied with [`run_migrations`];
//! [`seed_catalog`] fills an empty offers table with the default catalog.

mod offer_repository;
mod seed;
mod user_repository;

pub use offer_repository::PostgresOfferRepository;
pub use seed::seed_catalog;
pub use user_repository::PostgresUserRepository;

use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Migration failed: {}", e)))
}
