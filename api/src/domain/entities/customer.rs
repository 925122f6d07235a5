//! Customer domain entity
//!
//! A customer is identified by a store-assigned integer id. Orders reference a
//! customer but are not owned by it; see [`CustomerWithOrders`] for the joined view.

use serde::{Deserialize, Serialize};

use super::order::Order;
use crate::error::DomainError;

/// Unique identifier for a customer, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub email: String,
}

impl Customer {
    /// Check the same field rules a create payload must satisfy
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.name, &self.address, &self.email)
    }
}

/// Data needed to create a new customer (the id is assigned by the store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub email: String,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.name, &self.address, &self.email)
    }

    /// Attach an id, producing the full record used for updates
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            email: self.email,
        }
    }
}

/// A customer together with every order that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerWithOrders {
    pub customer: Customer,
    pub orders: Vec<Order>,
}

fn validate_fields(name: &str, address: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name must not be blank".to_string()));
    }
    if address.trim().is_empty() {
        return Err(DomainError::Validation(
            "address must not be blank".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(DomainError::Validation(format!(
            "email '{}' is not a valid address",
            email
        )));
    }
    Ok(())
}
