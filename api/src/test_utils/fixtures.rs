//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use rust_decimal::Decimal;

use crate::domain::entities::{Customer, CustomerId, NewCustomer, NewOrder, Order, OrderId};

/// Create a test customer with id 1
pub fn test_customer() -> Customer {
    test_customer_with_id(1)
}

/// Create a test customer with a specific id
pub fn test_customer_with_id(id: i32) -> Customer {
    Customer {
        id: CustomerId(id),
        name: format!("Customer {}", id),
        address: format!("{} Test Street, Springfield", id),
        email: format!("customer{}@example.com", id),
    }
}

/// Create a create-customer payload with a specific name
pub fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        address: "42 Main Street, Springfield".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    }
}

/// Create a test order belonging to `customer_id`
pub fn test_order(id: i32, customer_id: i32) -> Order {
    Order {
        id: OrderId(id),
        name: format!("Order {}", id),
        cost: Decimal::new(1250 + i64::from(id), 2),
        customer_id: CustomerId(customer_id),
    }
}

/// Create a create-order payload for `customer_id`
pub fn new_order(customer_id: i32) -> NewOrder {
    NewOrder {
        name: "Mechanical keyboard".to_string(),
        cost: Decimal::new(8999, 2),
        customer_id: CustomerId(customer_id),
    }
}
