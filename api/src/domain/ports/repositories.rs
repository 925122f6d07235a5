//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).
//!
//! Every call is self-contained: an implementation acquires its storage handle
//! at the start of the call and releases it before returning.

use async_trait::async_trait;

use crate::domain::entities::{
    Customer, CustomerId, CustomerWithOrders, NewCustomer, NewOrder, Order, OrderId,
};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List customers in insertion order, skipping `offset` and returning at most `limit`.
    /// A `limit` of 0 means no limit.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Find a customer and every order referencing it in one round trip
    async fn find_with_orders(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerWithOrders>, DomainError>;

    /// Create a new customer
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Overwrite every field of an existing customer.
    /// Returns `None` without writing anything if no customer has this id.
    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError>;

    /// Delete a customer. Returns false if no customer has this id.
    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError>;
}

/// Repository for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List all orders in insertion order
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Find all orders referencing a customer
    async fn find_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<Order>, DomainError>;

    /// Create a new order
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Overwrite every field of an existing order.
    /// Returns `None` without writing anything if no order has this id.
    async fn update(&self, order: &Order) -> Result<Option<Order>, DomainError>;
}
