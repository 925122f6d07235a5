//! Order service

use std::sync::Arc;

use crate::domain::entities::{CustomerId, NewOrder, Order, OrderId};
use crate::domain::ports::OrderRepository;
use crate::error::{AppError, DomainError};

/// Service for managing orders
pub struct OrderService<OR>
where
    OR: OrderRepository,
{
    orders: Arc<OR>,
}

impl<OR> OrderService<OR>
where
    OR: OrderRepository,
{
    pub fn new(orders: Arc<OR>) -> Self {
        Self { orders }
    }

    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.list().await?)
    }

    pub async fn get(&self, id: &OrderId) -> Result<Option<Order>, AppError> {
        Ok(self.orders.find_by_id(id).await?)
    }

    /// Orders referencing a customer; empty when there are none or the customer is unknown
    pub async fn list_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_by_customer(customer_id).await?)
    }

    /// Validate and persist a new order
    ///
    /// `customer_id` is not looked up here. A dangling reference is rejected by
    /// the store's foreign key and surfaces as a database error.
    pub async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        order.validate()?;

        let created = self.orders.create(&order).await?;
        tracing::debug!(order_id = %created.id, customer_id = %created.customer_id, "Created order");

        Ok(created)
    }

    /// Replace every field of an existing order; NotFound if absent
    pub async fn update(&self, order: Order) -> Result<Order, AppError> {
        order.validate()?;

        let updated = self
            .orders
            .update(&order)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Order {} not found", order.id)))?;
        tracing::debug!(order_id = %updated.id, "Updated order");

        Ok(updated)
    }
}
