use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::OrderError;
use crate::domain::order::{round_amount, Order, OrderStatus, MAX_AMOUNT};
use crate::domain::ports::OrderStore;
use crate::messages::{CreateOrderRequest, CreateOrderResponse, OrderMessage};

pub struct CreateOrderHandler {
    store: Arc<dyn OrderStore>,
}

impl CreateOrderHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Validates the request, assigns id, status and creation time, then
    /// persists the order. Not idempotent: every call creates a new order.
    pub fn handle(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, OrderError> {
        validate(&req).inspect_err(|e| log::debug!("rejected CreateOrder: {}", e))?;

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: req.user_id,
            item: req.item,
            amount: round_amount(req.amount),
            status: OrderStatus::New,
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.create(&order) {
            log::error!("failed to persist order {}: {}", order.id, e);
            return Err(OrderError::StorageFailure(e));
        }

        log::info!("created order {} for user {}", order.id, order.user_id);
        Ok(CreateOrderResponse {
            order: OrderMessage::from(&order),
        })
    }
}

fn validate(req: &CreateOrderRequest) -> Result<(), OrderError> {
    if req.user_id.is_empty() {
        return Err(OrderError::InvalidInput("user_id is required".to_string()));
    }
    if req.item.is_empty() {
        return Err(OrderError::InvalidInput("item is required".to_string()));
    }
    // Also rejects NaN and infinities.
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(OrderError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    // The stored amount keeps two decimals; it must still be positive.
    let stored = round_amount(req.amount);
    if stored <= 0.0 {
        return Err(OrderError::InvalidInput(
            "amount must be at least 0.01".to_string(),
        ));
    }
    if stored > MAX_AMOUNT {
        return Err(OrderError::InvalidInput(format!(
            "amount must not exceed {:.2}",
            MAX_AMOUNT
        )));
    }
    Ok(())
}
