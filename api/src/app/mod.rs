//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod customer_service;
pub mod order_service;
pub mod seed_service;

pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use seed_service::SeedService;
