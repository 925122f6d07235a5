//! SQLite adapter for CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use crate::domain::entities::{Customer, CustomerId, CustomerWithOrders, NewCustomer, Order};
use crate::domain::ports::CustomerRepository;
use crate::entity::{customers, orders};
use crate::error::DomainError;

/// SQLite needs a LIMIT clause whenever OFFSET is used. Also the largest
/// value SQLite binds, so offset and limit are clamped to it.
const NO_LIMIT: u64 = i64::MAX as u64;

/// SQLite implementation of CustomerRepository
pub struct SqliteCustomerRepository {
    db: DatabaseConnection,
}

impl SqliteCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Customer>, DomainError> {
        let (offset, limit) = match (offset.min(NO_LIMIT), limit.min(NO_LIMIT)) {
            (0, 0) => (None, None),
            (offset, 0) => (Some(offset), Some(NO_LIMIT)),
            (0, limit) => (None, Some(limit)),
            (offset, limit) => (Some(offset), Some(limit)),
        };

        let results = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_with_orders(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerWithOrders>, DomainError> {
        // Single LEFT JOIN; the rows collapse into one (customer, orders) pair
        let mut results = customers::Entity::find_by_id(id.0)
            .find_with_related(orders::Entity)
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.pop().map(|(customer, orders)| CustomerWithOrders {
            customer: customer.into(),
            orders: orders.into_iter().map(Order::from).collect(),
        }))
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let model = customers::ActiveModel {
            name: Set(customer.name.clone()),
            address: Set(customer.address.clone()),
            email: Set(customer.email.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let existing = customers::Entity::find_by_id(customer.id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if existing.is_none() {
            return Ok(None);
        }

        let updated = customers::ActiveModel {
            id: Set(customer.id.0),
            name: Set(customer.name.clone()),
            address: Set(customer.address.clone()),
            email: Set(customer.email.clone()),
        }
        .update(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        let result = customers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            name: model.name,
            address: model.address,
            email: model.email,
        }
    }
}
