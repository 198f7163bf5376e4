//! SignupHandler - Command handler for account registration.

use std::sync::Arc;

use crate::domain::user::{Age, Email, Gender, NewUser, PersonName, User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

/// Raw signup input, validated by the handler.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub gender: String,
    pub password: String,
}

/// Handler for creating accounts.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SignupHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<User, UserError> {
        let email = Email::new(cmd.email)?;
        let firstname = PersonName::new("firstname", cmd.firstname)?;
        let lastname = PersonName::new("lastname", cmd.lastname)?;
        let age = Age::new(cmd.age)?;
        let gender: Gender = cmd.gender.parse()?;
        if cmd.password.is_empty() {
            return Err(UserError::validation("password", "must not be empty"));
        }

        // Checked up front so a duplicate never pays for a bcrypt round
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::email_already_registered(email.as_str()));
        }

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        let user = self
            .users
            .create(&NewUser {
                email,
                firstname,
                lastname,
                age,
                gender,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(user)
    }
}
