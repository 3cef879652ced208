use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::errors::StoreError;
use crate::domain::order::Order;
use crate::domain::ports::OrderStore;

type CreateFn = Box<dyn Fn(&Order) -> Result<(), StoreError> + Send + Sync>;
type GetFn = Box<dyn Fn(&str) -> Result<Order, StoreError> + Send + Sync>;
type ListFn = Box<dyn Fn() -> Result<Vec<Order>, StoreError> + Send + Sync>;
type CloseFn = Box<dyn Fn() -> Result<(), StoreError> + Send + Sync>;

/// Store double whose operations can each be replaced by a closure.
///
/// Without an override `create` and `close` succeed, `get` reports
/// [`StoreError::NotFound`] and `list` is empty. Every call is counted.
#[derive(Default)]
pub struct MockOrderStore {
    create_fn: Option<CreateFn>,
    get_fn: Option<GetFn>,
    list_fn: Option<ListFn>,
    close_fn: Option<CloseFn>,
    create_calls: AtomicUsize,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
    close_calls: AtomicUsize,
}

impl MockOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create<F>(mut self, f: F) -> Self
    where
        F: Fn(&Order) -> Result<(), StoreError> + Send + Sync + 'static,
    {
        self.create_fn = Some(Box::new(f));
        self
    }

    pub fn on_get<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Order, StoreError> + Send + Sync + 'static,
    {
        self.get_fn = Some(Box::new(f));
        self
    }

    pub fn on_list<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<Order>, StoreError> + Send + Sync + 'static,
    {
        self.list_fn = Some(Box::new(f));
        self
    }

    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<(), StoreError> + Send + Sync + 'static,
    {
        self.close_fn = Some(Box::new(f));
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

impl OrderStore for MockOrderStore {
    fn create(&self, order: &Order) -> Result<(), StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        match &self.create_fn {
            Some(f) => f(order),
            None => Ok(()),
        }
    }

    fn get(&self, id: &str) -> Result<Order, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        match &self.get_fn {
            Some(f) => f(id),
            None => Err(StoreError::NotFound),
        }
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.list_fn {
            Some(f) => f(),
            None => Ok(Vec::new()),
        }
    }

    fn close(&self) -> Result<(), StoreError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        match &self.close_fn {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}
