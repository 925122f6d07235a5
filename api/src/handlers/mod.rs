//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod customers;
pub mod orders;

pub use customers::{
    create_customer, delete_customer, get_customer_by_id, get_customer_with_orders,
    list_customers, replace_customer, update_customer,
};
pub use orders::{create_order, get_order_by_id, list_orders, list_orders_by_customer, update_order};
