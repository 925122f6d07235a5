//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod customer;
pub mod order;

pub use customer::{Customer, CustomerId, CustomerWithOrders, NewCustomer};
pub use order::{NewOrder, Order, OrderId, COST_SCALE};
