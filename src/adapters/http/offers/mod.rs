//! HTTP adapter for offer endpoints.
//!
//! - `GET /offers` - List offers
//! - `GET /offers/{id}` - Get an offer
//! - `POST /offers` - Create an offer
//! - `PATCH /offers/{id}` - Update an offer
//! - `DELETE /offers/{id}` - Delete an offer

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AccessRuleResponse, OfferResponse};
pub use routes::offer_routes;
