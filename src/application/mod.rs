//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers load state through repositories, call into the domain, and
//! commit the result; they hold no state of their own.

pub mod handlers;

pub use handlers::{
    // Auth handlers
    GetProfileHandler, GetProfileQuery, LoginCommand, LoginHandler, LoginResult, LogoutCommand,
    LogoutHandler, LogoutResult, ProfileView, SignupCommand, SignupHandler,
    // Subscription handlers
    SubscribeCommand, SubscribeHandler, SubscribeResult, UnsubscribeCommand, UnsubscribeHandler,
    UnsubscribeResult,
};
