//! Default catalog bootstrap.

use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::offer::default_catalog;

use super::offer_repository::insert_rule_links;

/// Insert the default offers when the offers table is empty.
///
/// Runs in one transaction, so a partial catalog is never visible.
/// Returns the number of offers inserted.
pub async fn seed_catalog(pool: &PgPool) -> Result<usize, DomainError> {
    let map_err =
        |context: &str, e: sqlx::Error| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e));

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| map_err("Failed to begin transaction", e))?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offers")
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_err("Failed to count offers", e))?;

    if existing > 0 {
        tracing::debug!(existing, "Offer catalog already present, skipping seed");
        return Ok(0);
    }

    let catalog = default_catalog()?;
    for offer in &catalog {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO offers (title, description, price, benefits)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(offer.price.value())
        .bind(&offer.benefits)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_err("Failed to seed offer", e))?;

        insert_rule_links(&mut tx, id, &offer.access_rules).await?;
    }

    tx.commit()
        .await
        .map_err(|e| map_err("Failed to commit catalog", e))?;

    tracing::info!(offers = catalog.len(), "Seeded default offer catalog");
    Ok(catalog.len())
}
