//! Domain layer
//!
//! Customers, orders, and the repository ports they are persisted through.
//! - `entities`: Domain models and their field rules
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod ports;
