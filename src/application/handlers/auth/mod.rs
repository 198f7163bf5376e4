//! Authentication handlers.
//!
//! ## Commands
//! - Signing up
//! - Logging in (password → session token)
//! - Logging out (token revocation)
//!
//! ## Queries
//! - Current user's profile with resolved offers

mod get_profile;
mod login;
mod logout;
mod signup;

// Commands
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::{LogoutCommand, LogoutHandler, LogoutResult};
pub use signup::{SignupCommand, SignupHandler};

// Queries
pub use get_profile::{GetProfileHandler, GetProfileQuery, ProfileView};
