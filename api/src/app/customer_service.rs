//! Customer service
//!
//! Customer use cases: paging, lookup, creation, full-record updates, deletion,
//! and the joined customer-with-orders view.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, CustomerWithOrders, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::{AppError, DomainError};

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// List customers in insertion order. A `limit` of 0 returns everything after `offset`.
    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.list(offset, limit).await?)
    }

    pub async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.find_by_id(id).await?)
    }

    /// Validate and persist a new customer; the store assigns the id
    pub async fn create(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        customer.validate()?;

        let created = self.customers.create(&customer).await?;
        tracing::debug!(customer_id = %created.id, "Created customer");

        Ok(created)
    }

    /// Replace every field of an existing customer
    ///
    /// Fails with NotFound if no customer has this id; nothing is inserted.
    pub async fn update(&self, customer: Customer) -> Result<Customer, AppError> {
        customer.validate()?;

        let updated = self
            .customers
            .update(&customer)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Customer {} not found", customer.id))
            })?;
        tracing::debug!(customer_id = %updated.id, "Updated customer");

        Ok(updated)
    }

    /// Delete a customer. Orders referencing it are not touched.
    pub async fn delete(&self, id: &CustomerId) -> Result<(), AppError> {
        if !self.customers.delete(id).await? {
            return Err(AppError::NotFound(format!("Customer {} not found", id)));
        }
        tracing::debug!(customer_id = %id, "Deleted customer");

        Ok(())
    }

    /// Fetch a customer with its orders; `None` when the customer does not exist
    pub async fn get_with_orders(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerWithOrders>, AppError> {
        Ok(self.customers.find_with_orders(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderId;
    use crate::test_utils::{
        new_customer, test_customer, test_customer_with_id, test_order, InMemoryCustomerRepository,
    };

    fn create_service(repo: InMemoryCustomerRepository) -> CustomerService<InMemoryCustomerRepository> {
        CustomerService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_assigns_positive_unique_ids() {
        let service = create_service(InMemoryCustomerRepository::new());

        let first = service.create(new_customer("Ada")).await.unwrap();
        let second = service.create(new_customer("Grace")).await.unwrap();

        assert!(first.id.0 > 0);
        assert!(second.id.0 > 0);
        assert_ne!(first.id, second.id);

        let found = service.get(&first.id).await.unwrap().unwrap();
        assert_eq!(found, first);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload() {
        let service = create_service(InMemoryCustomerRepository::new());

        let mut payload = new_customer("Ada");
        payload.email = "not-an-email".to_string();

        let result = service.create(payload).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
        assert!(service.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let service = create_service(InMemoryCustomerRepository::new());
        assert!(service.get(&CustomerId(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let repo = (1..=6).fold(InMemoryCustomerRepository::new(), |repo, id| {
            repo.with_customer(test_customer_with_id(id))
        });
        let service = create_service(repo);

        let page = service.list(2, 3).await.unwrap();
        let ids: Vec<i32> = page.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 4, 5]);

        let rest = service.list(4, 0).await.unwrap();
        let ids: Vec<i32> = rest.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[tokio::test]
    async fn update_overwrites_existing_customer() {
        let customer = test_customer();
        let service = create_service(InMemoryCustomerRepository::new().with_customer(customer.clone()));

        let mut changed = customer.clone();
        changed.address = "1 Infinite Loop".to_string();

        let updated = service.update(changed.clone()).await.unwrap();
        assert_eq!(updated, changed);
        assert_eq!(service.get(&customer.id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn update_twice_is_idempotent() {
        let customer = test_customer();
        let service = create_service(InMemoryCustomerRepository::new().with_customer(customer.clone()));

        let mut changed = customer.clone();
        changed.name = "Renamed".to_string();

        let first = service.update(changed.clone()).await.unwrap();
        let second = service.update(changed.clone()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(service.list(0, 0).await.unwrap(), vec![changed]);
    }

    #[tokio::test]
    async fn update_unknown_customer_is_not_found_and_inserts_nothing() {
        let service = create_service(InMemoryCustomerRepository::new());

        let result = service.update(test_customer_with_id(42)).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
        assert!(service.get(&CustomerId(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_customer() {
        let customer = test_customer();
        let service = create_service(InMemoryCustomerRepository::new().with_customer(customer.clone()));

        service.delete(&customer.id).await.unwrap();
        assert!(service.get(&customer.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_unknown_customer_is_not_found() {
        let service = create_service(InMemoryCustomerRepository::new());
        let result = service.delete(&CustomerId(5)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_with_orders_embeds_only_matching_orders() {
        let customer = test_customer_with_id(1);
        let repo = InMemoryCustomerRepository::new()
            .with_customer(customer.clone())
            .with_customer(test_customer_with_id(2))
            .with_order(test_order(1, 1))
            .with_order(test_order(2, 2))
            .with_order(test_order(3, 1));
        let service = create_service(repo);

        let result = service.get_with_orders(&customer.id).await.unwrap().unwrap();
        assert_eq!(result.customer, customer);
        let order_ids: Vec<OrderId> = result.orders.iter().map(|o| o.id).collect();
        assert_eq!(order_ids, vec![OrderId(1), OrderId(3)]);
    }

    #[tokio::test]
    async fn get_with_orders_for_unknown_customer_is_none() {
        let service = create_service(InMemoryCustomerRepository::new());
        assert!(service
            .get_with_orders(&CustomerId(999))
            .await
            .unwrap()
            .is_none());
    }
}
