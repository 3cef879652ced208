pub mod check_order_owner;
pub mod create_order;
pub mod get_order;
pub mod list_orders;
pub mod order_service;

pub use order_service::OrderService;
