use bigdecimal::{BigDecimal, FromPrimitive, ToPrimitive};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderStatus};
use crate::schema::orders;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: String,
    pub user_id: String,
    pub item: String,
    pub amount: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&Order> for OrderRow {
    type Error = StoreError;

    fn try_from(o: &Order) -> Result<Self, Self::Error> {
        let amount = BigDecimal::from_f64(o.amount).ok_or_else(|| {
            StoreError::Internal(format!("amount {} is not representable", o.amount))
        })?;
        Ok(Self {
            id: o.id.clone(),
            user_id: o.user_id.clone(),
            item: o.item.clone(),
            amount,
            status: o.status.as_str().to_string(),
            created_at: o.created_at,
        })
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|e| StoreError::Corrupt(format!("order {}: {}", row.id, e)))?;
        let amount = row.amount.to_f64().ok_or_else(|| {
            StoreError::Corrupt(format!("order {}: amount {} out of range", row.id, row.amount))
        })?;
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            item: row.item,
            amount,
            status,
            created_at: row.created_at,
        })
    }
}
