//! Request and response messages of the `order.v1.OrderService` RPC surface.
//!
//! Field names follow protobuf JSON mapping (lowerCamelCase). Request fields
//! that are absent decode to their zero value, as a proto3 decoder would, so
//! that missing input is rejected by validation rather than by the decoder.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::Order;

// ── Order ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderMessage {
    pub id: String,
    pub user_id: String,
    pub item: String,
    pub amount: f64,
    /// One of `NEW`, `IN_PROGRESS`, `FINISHED`.
    pub status: String,
    /// RFC 3339 timestamp in UTC, e.g. `2024-01-15T10:30:00Z`.
    pub created_at: String,
}

impl From<&Order> for OrderMessage {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id.clone(),
            user_id: o.user_id.clone(),
            item: o.item.clone(),
            amount: o.amount,
            status: o.status.as_str().to_string(),
            created_at: o.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub item: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub order: OrderMessage,
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GetOrderRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetOrderResponse {
    pub order: OrderMessage,
}

// ── ListOrders ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListOrdersRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListOrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderMessage>,
}

// ── CheckOrderOwner ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOrderOwnerRequest {
    pub order_id: String,
    pub user_id: String,
}

/// Empty on purpose: success means the user owns the order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckOrderOwnerResponse {}
