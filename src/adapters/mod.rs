//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT sessions, bcrypt hashing, Redis token blacklist
//! - `http` - REST API (axum)
//! - `memory` - In-memory repositories for tests and local runs
//! - `postgres` - PostgreSQL repositories, migrations and catalog seeding

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
