use super::errors::StoreError;
use super::order::Order;

/// Persistence for orders. Implementations assign no fields: an order is
/// stored exactly as the caller built it.
pub trait OrderStore: Send + Sync + 'static {
    fn create(&self, order: &Order) -> Result<(), StoreError>;
    /// Returns [`StoreError::NotFound`] when no order has this id.
    fn get(&self, id: &str) -> Result<Order, StoreError>;
    /// All orders, most recently created first.
    fn list(&self) -> Result<Vec<Order>, StoreError>;
    fn close(&self) -> Result<(), StoreError>;
}
