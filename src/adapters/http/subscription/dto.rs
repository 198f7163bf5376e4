//! Request and response bodies for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::{Subscribed, Unsubscribed};

/// Body of `POST /subscription/subscribeTo`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeRequest {
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
    pub user_id: i64,
    pub offer_id: i64,
    pub offer_title: String,
}

impl From<Subscribed> for SubscribeResponse {
    fn from(outcome: Subscribed) -> Self {
        Self {
            message: "Successfully subscribed to offer".to_string(),
            user_id: outcome.user_id.as_i64(),
            offer_id: outcome.offer_id.as_i64(),
            offer_title: outcome.offer_title,
        }
    }
}

/// Body of `POST /subscription/unsubscribeTo`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnsubscribeRequest {
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeResponse {
    pub message: String,
    pub user_id: i64,
    pub previous_offer_id: i64,
    pub previous_offer_title: String,
}

impl From<Unsubscribed> for UnsubscribeResponse {
    fn from(outcome: Unsubscribed) -> Self {
        Self {
            message: "Successfully unsubscribed from offer".to_string(),
            user_id: outcome.user_id.as_i64(),
            previous_offer_id: outcome.previous_offer_id.as_i64(),
            previous_offer_title: outcome.previous_offer_title,
        }
    }
}
