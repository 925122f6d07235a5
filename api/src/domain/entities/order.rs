//! Order domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use crate::error::DomainError;

/// Decimal places the `cost` column stores
pub const COST_SCALE: u32 = 2;

/// Unique identifier for an order, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub cost: Decimal,
    /// Not checked here; the store's foreign key is the only guard
    pub customer_id: CustomerId,
}

impl Order {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_cost(&self.cost)
    }
}

/// Data needed to create a new order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub name: String,
    pub cost: Decimal,
    pub customer_id: CustomerId,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_cost(&self.cost)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}

fn validate_cost(cost: &Decimal) -> Result<(), DomainError> {
    if cost.normalize().scale() > COST_SCALE {
        return Err(DomainError::Validation(format!(
            "cost must have at most {} decimal places",
            COST_SCALE
        )));
    }
    Ok(())
}
