use std::sync::Arc;

use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStore;
use crate::messages::{CheckOrderOwnerRequest, CheckOrderOwnerResponse};

pub const NOT_OWNER_MESSAGE: &str = "order does not belong to user";

pub struct CheckOrderOwnerHandler {
    store: Arc<dyn OrderStore>,
}

impl CheckOrderOwnerHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Succeeds with an empty response iff the order exists and belongs to
    /// `user_id`. Existence is checked before ownership.
    pub fn handle(
        &self,
        req: CheckOrderOwnerRequest,
    ) -> Result<CheckOrderOwnerResponse, OrderError> {
        validate(&req).inspect_err(|e| log::debug!("rejected CheckOrderOwner: {}", e))?;

        let order = self.store.get(&req.order_id).map_err(|e| {
            let err = OrderError::from(e);
            match &err {
                OrderError::NotFound(_) => log::info!("order {} not found", req.order_id),
                OrderError::StorageFailure(inner) => {
                    log::error!("failed to load order {}: {}", req.order_id, inner)
                }
                _ => {}
            }
            err
        })?;

        if !order.is_owned_by(&req.user_id) {
            log::info!(
                "user {} is not the owner of order {}",
                req.user_id,
                req.order_id
            );
            return Err(OrderError::PermissionDenied(NOT_OWNER_MESSAGE.to_string()));
        }

        Ok(CheckOrderOwnerResponse {})
    }
}

fn validate(req: &CheckOrderOwnerRequest) -> Result<(), OrderError> {
    if req.order_id.is_empty() {
        return Err(OrderError::InvalidInput("order_id is required".to_string()));
    }
    if req.user_id.is_empty() {
        return Err(OrderError::InvalidInput("user_id is required".to_string()));
    }
    Ok(())
}
