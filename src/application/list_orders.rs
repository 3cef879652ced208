use std::sync::Arc;

use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStore;
use crate::messages::{ListOrdersRequest, ListOrdersResponse, OrderMessage};

pub struct ListOrdersHandler {
    store: Arc<dyn OrderStore>,
}

impl ListOrdersHandler {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Orders come back in the store's order (newest first); they are not
    /// re-sorted here.
    pub fn handle(&self, _req: ListOrdersRequest) -> Result<ListOrdersResponse, OrderError> {
        let orders = self.store.list().map_err(|e| {
            log::error!("failed to list orders: {}", e);
            OrderError::StorageFailure(e)
        })?;

        Ok(ListOrdersResponse {
            orders: orders.iter().map(OrderMessage::from).collect(),
        })
    }
}
