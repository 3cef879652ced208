pub mod mock_store;
pub mod models;
pub mod order_store;

pub use mock_store::MockOrderStore;
pub use order_store::DieselOrderStore;
