//! PostgreSQL implementation of OfferRepository.
//!
//! Offers are read with their rule names aggregated into a text array, so
//! one query returns the offer together with its full rule set.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::foundation::{DomainError, ErrorCode, OfferId};
use crate::domain::offer::{AccessRule, AccessRuleSet, NewOffer, Offer, OfferError, Price};
use crate::ports::OfferRepository;

const SELECT_OFFERS: &str = r#"
    SELECT o.id, o.title, o.description, o.price, o.benefits,
           COALESCE(
               array_agg(ar.access_type::text ORDER BY ar.id) FILTER (WHERE ar.id IS NOT NULL),
               '{}'::text[]
           ) AS access_types
    FROM offers o
    LEFT JOIN offer_access_rules oar ON oar.offer_id = o.id
    LEFT JOIN access_rules ar ON ar.id = oar.access_rule_id
"#;

/// PostgreSQL implementation of the OfferRepository port.
pub struct PostgresOfferRepository {
    pool: PgPool,
}

impl PostgresOfferRepository {
    /// Creates a new PostgresOfferRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an offer with its rule names.
#[derive(Debug, sqlx::FromRow)]
struct OfferRow {
    id: i64,
    title: String,
    description: String,
    price: i32,
    benefits: String,
    access_types: Vec<String>,
}

impl TryFrom<OfferRow> for Offer {
    type Error = DomainError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid price for offer {}: {}", row.id, e))
        })?;

        Ok(Offer {
            id: OfferId::new(row.id),
            title: row.title,
            description: row.description,
            price,
            benefits: row.benefits,
            access_rules: parse_access_types(&row.access_types)?,
        })
    }
}

fn parse_access_types(names: &[String]) -> Result<AccessRuleSet, DomainError> {
    names
        .iter()
        .map(|name| {
            name.parse::<AccessRule>().map_err(|_| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid access_type value: {}", name),
                )
            })
        })
        .collect()
}

fn map_sqlx(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

pub(super) async fn insert_rule_links(
    tx: &mut Transaction<'_, Postgres>,
    offer_id: i64,
    rules: &AccessRuleSet,
) -> Result<(), DomainError> {
    if rules.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO offer_access_rules (offer_id, access_rule_id)
        SELECT $1, UNNEST($2::int[])
        "#,
    )
    .bind(offer_id)
    .bind(rules.catalog_ids())
    .execute(&mut **tx)
    .await
    .map_err(|e| map_sqlx("Failed to link access rules", e))?;
    Ok(())
}

#[async_trait]
impl OfferRepository for PostgresOfferRepository {
    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, DomainError> {
        let row: Option<OfferRow> =
            sqlx::query_as(&format!("{} WHERE o.id = $1 GROUP BY o.id", SELECT_OFFERS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_sqlx("Failed to find offer", e))?;

        row.map(Offer::try_from).transpose()
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Offer>, DomainError> {
        let rows: Vec<OfferRow> = sqlx::query_as(&format!(
            "{} GROUP BY o.id ORDER BY o.id OFFSET $1 LIMIT $2",
            SELECT_OFFERS
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx("Failed to list offers", e))?;

        rows.into_iter().map(Offer::try_from).collect()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM offers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx("Failed to count offers", e))
    }

    async fn create(&self, offer: &NewOffer) -> Result<Offer, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx("Failed to begin transaction", e))?;

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
        .map_err(|e| map_sqlx("Failed to save offer", e))?;

        insert_rule_links(&mut tx, id, &offer.access_rules).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx("Failed to commit offer", e))?;

        Ok(offer.clone().into_offer(OfferId::new(id)))
    }

    async fn update(&self, offer: &Offer) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx("Failed to begin transaction", e))?;

        let result = sqlx::query(
            r#"
            UPDATE offers SET
                title = $2,
                description = $3,
                price = $4,
                benefits = $5
            WHERE id = $1
            "#,
        )
        .bind(offer.id.as_i64())
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(offer.price.value())
        .bind(&offer.benefits)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx("Failed to update offer", e))?;

        if result.rows_affected() == 0 {
            return Err(OfferError::not_found(offer.id).into());
        }

        sqlx::query("DELETE FROM offer_access_rules WHERE offer_id = $1")
            .bind(offer.id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx("Failed to clear access rules", e))?;

        insert_rule_links(&mut tx, offer.id.as_i64(), &offer.access_rules).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx("Failed to commit offer", e))
    }

    async fn delete(&self, id: OfferId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return OfferError::in_use(id).into();
                    }
                }
                map_sqlx("Failed to delete offer", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(OfferError::not_found(id).into());
        }

        Ok(())
    }
}
