//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Customer, CustomerId, CustomerWithOrders, NewCustomer, NewOrder, Order, OrderId,
};
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

/// Ordered by id, which doubles as insertion order
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
    /// Orders visible to `find_with_orders`
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
    last_id: Arc<RwLock<i32>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(customer.id.0);
            self.customers.write().unwrap().insert(customer.id, customer);
        }
        self
    }

    /// Pre-populate with an order returned by the joined lookup
    pub fn with_order(self, order: Order) -> Self {
        self.orders.write().unwrap().insert(order.id, order);
        self
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        let take = if limit == 0 { usize::MAX } else { limit as usize };
        Ok(customers
            .values()
            .skip(offset as usize)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        Ok(self.customers.read().unwrap().get(id).cloned())
    }

    async fn find_with_orders(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerWithOrders>, DomainError> {
        let customers = self.customers.read().unwrap();
        let orders = self.orders.read().unwrap();

        Ok(customers.get(id).map(|customer| CustomerWithOrders {
            customer: customer.clone(),
            orders: orders
                .values()
                .filter(|o| o.customer_id == *id)
                .cloned()
                .collect(),
        }))
    }

    async fn create(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;

        let customer = new_customer.clone().with_id(CustomerId(*last_id));
        self.customers
            .write()
            .unwrap()
            .insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let mut customers = self.customers.write().unwrap();
        match customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(Some(customer.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, DomainError> {
        Ok(self.customers.write().unwrap().remove(id).is_some())
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
    last_id: Arc<RwLock<i32>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order for testing
    pub fn with_order(self, order: Order) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(order.id.0);
            self.orders.write().unwrap().insert(order.id, order);
        }
        self
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read().unwrap().get(id).cloned())
    }

    async fn find_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .filter(|o| o.customer_id == *customer_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;

        let order = Order {
            id: OrderId(*last_id),
            name: new_order.name.clone(),
            cost: new_order.cost,
            customer_id: new_order.customer_id,
        };
        self.orders.write().unwrap().insert(order.id, order.clone());

        Ok(order)
    }

    async fn update(&self, order: &Order) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(&order.id) {
            Some(existing) => {
                *existing = order.clone();
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}
