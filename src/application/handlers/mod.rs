//! Command and query handlers.
//!
//! Each handler owns `Arc`-wrapped ports and exposes a single `handle`
//! method taking a command or query struct.

pub mod auth;
pub mod subscription;

pub use auth::{
    GetProfileHandler, GetProfileQuery, LoginCommand, LoginHandler, LoginResult, LogoutCommand,
    LogoutHandler, LogoutResult, ProfileView, SignupCommand, SignupHandler,
};
pub use subscription::{
    SubscribeCommand, SubscribeHandler, SubscribeResult, UnsubscribeCommand, UnsubscribeHandler,
    UnsubscribeResult,
};
