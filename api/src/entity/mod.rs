//! SeaORM entities
//!
//! Table models mapped one-to-one onto the SQLite schema.

pub mod customers;
pub mod orders;
