//! Authentication adapters.
//!
//! - `jwt` - HS256 session tokens (`TokenIssuer`, `SessionValidator`)
//! - `password` - bcrypt `PasswordHasher`
//! - `redis_blacklist` - Redis `TokenBlacklist`

mod jwt;
mod password;
mod redis_blacklist;

pub use jwt::{Claims, JwtTokenService};
pub use password::BcryptPasswordHasher;
pub use redis_blacklist::{blacklist_key, RedisTokenBlacklist};
