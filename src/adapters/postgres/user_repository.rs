//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, OfferId, UserId, ValidationError};
use crate::domain::subscription::SubscriptionState;
use crate::domain::user::{Age, Email, Gender, NewUser, PersonName, User, UserError};
use crate::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, email, firstname, lastname, age, gender, password_hash, offer_id, previous_offer_id";

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    firstname: String,
    lastname: String,
    age: i32,
    gender: String,
    password_hash: String,
    offer_id: Option<i64>,
    previous_offer_id: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt = |e: ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored user {}: {}", row.id, e),
            )
        };

        Ok(User {
            id: UserId::new(row.id),
            email: Email::new(row.email.as_str()).map_err(corrupt)?,
            firstname: PersonName::new("firstname", row.firstname.as_str()).map_err(corrupt)?,
            lastname: PersonName::new("lastname", row.lastname.as_str()).map_err(corrupt)?,
            age: Age::new(row.age).map_err(corrupt)?,
            gender: parse_gender(&row.gender)?,
            password_hash: row.password_hash,
            subscription: SubscriptionState::new(
                row.offer_id.map(OfferId::new),
                row.previous_offer_id.map(OfferId::new),
            ),
        })
    }
}

fn parse_gender(s: &str) -> Result<Gender, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid gender value: {}", s))
    })
}

fn map_write_error(context: &str, email: &Email, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return UserError::email_already_registered(email.as_str()).into();
        }
    }
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn map_read_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_read_error("Failed to find user", e))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_read_error("Failed to find user", e))?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users ORDER BY id OFFSET $1 LIMIT $2",
            USER_COLUMNS
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error("Failed to list users", e))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, firstname, lastname, age, gender, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.firstname.as_str())
        .bind(user.lastname.as_str())
        .bind(user.age.years())
        .bind(user.gender.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to save user", &user.email, e))?;

        Ok(user.clone().into_user(UserId::new(id)))
    }

    async fn update_profile(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                firstname = $3,
                lastname = $4,
                age = $5,
                gender = $6,
                password_hash = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_i64())
        .bind(user.email.as_str())
        .bind(user.firstname.as_str())
        .bind(user.lastname.as_str())
        .bind(user.age.years())
        .bind(user.gender.as_str())
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("Failed to update user", &user.email, e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(user.id).into());
        }

        Ok(())
    }

    async fn save_subscription(
        &self,
        id: UserId,
        state: &SubscriptionState,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE users SET offer_id = $2, previous_offer_id = $3 WHERE id = $1",
        )
        .bind(id.as_i64())
        .bind(state.current_offer.map(|o| o.as_i64()))
        .bind(state.previous_offer.map(|o| o.as_i64()))
        .execute(&self.pool)
        .await
        .map_err(|e| map_read_error("Failed to save subscription", e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(id).into());
        }

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_read_error("Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(id).into());
        }

        Ok(())
    }
}
