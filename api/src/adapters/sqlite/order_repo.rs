//! SQLite adapter for OrderRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::entities::{CustomerId, NewOrder, Order, OrderId, COST_SCALE};
use crate::domain::ports::OrderRepository;
use crate::entity::orders;
use crate::error::DomainError;

/// SQLite implementation of OrderRepository
pub struct SqliteOrderRepository {
    db: DatabaseConnection,
}

impl SqliteOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let result = orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .filter(orders::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            name: Set(order.name.clone()),
            cost: Set(order.cost),
            customer_id: Set(order.customer_id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, order: &Order) -> Result<Option<Order>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let existing = orders::Entity::find_by_id(order.id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if existing.is_none() {
            return Ok(None);
        }

        let updated = orders::ActiveModel {
            id: Set(order.id.0),
            name: Set(order.name.clone()),
            cost: Set(order.cost),
            customer_id: Set(order.customer_id.0),
        }
        .update(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(updated.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: OrderId(model.id),
            name: model.name,
            cost: normalize_cost(model.cost),
            customer_id: CustomerId(model.customer_id),
        }
    }
}

/// SQLite hands decimals back through a float, so restore the column's scale
fn normalize_cost(mut cost: Decimal) -> Decimal {
    cost.rescale(COST_SCALE);
    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cost_restores_two_places() {
        let cost = Decimal::try_from(12.5_f64).unwrap();
        assert_eq!(normalize_cost(cost).to_string(), "12.50");
    }

    #[test]
    fn normalize_cost_rounds_float_noise() {
        let cost = Decimal::from_f64_retain(89.99_f64).unwrap();
        assert_eq!(normalize_cost(cost), Decimal::new(8999, 2));
        assert_eq!(normalize_cost(cost).to_string(), "89.99");
    }
}
