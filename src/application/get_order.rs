use std::sync::Arc;

use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStore;
use crate::messages::{GetOrderRequest, GetOrderResponse, OrderMessage};

pub struct GetOrderHandler {
    store: Arc<dyn OrderStore>,
}

impl GetOrderHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, req: GetOrderRequest) -> Result<GetOrderResponse, OrderError> {
        if req.id.is_empty() {
            log::debug!("rejected GetOrder: empty id");
            return Err(OrderError::InvalidInput("id is required".to_string()));
        }

        let order = self.store.get(&req.id).map_err(|e| {
            let err = OrderError::from(e);
            match &err {
                OrderError::NotFound(_) => log::info!("order {} not found", req.id),
                OrderError::StorageFailure(inner) => {
                    log::error!("failed to load order {}: {}", req.id, inner)
                }
                _ => {}
            }
            err
        })?;

        Ok(GetOrderResponse {
            order: OrderMessage::from(&order),
        })
    }
}
