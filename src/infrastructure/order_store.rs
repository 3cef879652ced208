use std::sync::RwLock;

use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::StoreError;
use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::schema::orders;

use super::models::OrderRow;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::NotFound => StoreError::NotFound,
            other => StoreError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(e: r2d2::Error) -> Self {
        StoreError::Internal(e.to_string())
    }
}

// ── Store ────────────────────────────────────────────────────────────────────

pub struct DieselOrderStore {
    pool: RwLock<Option<DbPool>>,
}

impl DieselOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: RwLock::new(Some(pool)),
        }
    }

    fn pool(&self) -> Result<DbPool, StoreError> {
        let guard = self
            .pool
            .read()
            .map_err(|_| StoreError::Internal("pool lock poisoned".to_string()))?;
        guard.clone().ok_or(StoreError::Closed)
    }
}

impl OrderStore for DieselOrderStore {
    fn create(&self, order: &Order) -> Result<(), StoreError> {
        let row = OrderRow::try_from(order)?;
        let mut conn = self.pool()?.get()?;

        diesel::insert_into(orders::table)
            .values(&row)
            .execute(&mut conn)?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Order, StoreError> {
        let mut conn = self.pool()?.get()?;

        let row = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        row.ok_or(StoreError::NotFound)?.try_into()
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.pool()?.get()?;

        orders::table
            .select(OrderRow::as_select())
            .order(orders::created_at.desc())
            .load::<OrderRow>(&mut conn)?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }

    /// Drops this store's handle on the pool. Connections are released once
    /// no other clone of the pool is alive.
    fn close(&self) -> Result<(), StoreError> {
        let mut guard = self
            .pool
            .write()
            .map_err(|_| StoreError::Internal("pool lock poisoned".to_string()))?;
        if guard.take().is_some() {
            log::info!("order store closed");
        }
        Ok(())
    }
}
