//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Service tests run against the in-memory repositories in `mocks`. Adapter and
//! route tests use a real in-memory SQLite database instead; see `sqlite_config`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

use crate::config::Config;

/// Configuration for a private in-memory database with seeding turned off
pub fn sqlite_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        seed_customers: 0,
        seed_orders_per_customer: 0,
        ..Config::default()
    }
}
