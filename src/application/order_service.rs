use std::sync::Arc;

use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStore;
use crate::messages::{
    CheckOrderOwnerRequest, CheckOrderOwnerResponse, CreateOrderRequest, CreateOrderResponse,
    GetOrderRequest, GetOrderResponse, ListOrdersRequest, ListOrdersResponse,
};

use super::check_order_owner::CheckOrderOwnerHandler;
use super::create_order::CreateOrderHandler;
use super::get_order::GetOrderHandler;
use super::list_orders::ListOrdersHandler;

/// The `order.v1.OrderService` operations, each forwarded to its handler.
pub struct OrderService {
    create_order: CreateOrderHandler,
    get_order: GetOrderHandler,
    list_orders: ListOrdersHandler,
    check_order_owner: CheckOrderOwnerHandler,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            create_order: CreateOrderHandler::new(store.clone()),
            get_order: GetOrderHandler::new(store.clone()),
            list_orders: ListOrdersHandler::new(store.clone()),
            check_order_owner: CheckOrderOwnerHandler::new(store),
        }
    }

    pub fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, OrderError> {
        self.create_order.handle(req)
    }

    pub fn get_order(&self, req: GetOrderRequest) -> Result<GetOrderResponse, OrderError> {
        self.get_order.handle(req)
    }

    pub fn list_orders(&self, req: ListOrdersRequest) -> Result<ListOrdersResponse, OrderError> {
        self.list_orders.handle(req)
    }

    pub fn check_order_owner(
        &self,
        req: CheckOrderOwnerRequest,
    ) -> Result<CheckOrderOwnerResponse, OrderError> {
        self.check_order_owner.handle(req)
    }
}
