//! User module - registered accounts and their profile data.
//!
//! # Module Structure
//!
//! - `values` - Email, names, age and gender value objects
//! - `account` - User entity, creation and profile patch models
//! - `errors` - User-management errors

mod account;
mod errors;
mod values;

pub use account::{NewUser, User, UserUpdate};
pub use errors::UserError;
pub use values::{Age, Email, Gender, PersonName};
