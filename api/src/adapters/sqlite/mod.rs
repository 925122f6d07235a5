//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite, plus the
//! connection and schema setup the process runs at startup.

pub mod customer_repo;
pub mod order_repo;


use std::time::Duration;

use sea_orm::sea_query::Table;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::config::Config;
use crate::entity::{customers, orders};

pub use customer_repo::SqliteCustomerRepository;
pub use order_repo::SqliteOrderRepository;

/// Idle timeout and lifetime of the single in-memory connection. Closing it
/// destroys the database, so the pool must never reap it.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Open the connection pool described by `config`
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(config)).await
}

fn connect_options(config: &Config) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(config.database_echo);

    // Each SQLite connection to `:memory:` is its own database
    if config.is_in_memory_database() {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    }

    options
}

/// Drop both tables if present and create them again from the entity definitions
pub async fn recreate_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // orders references customers: drop it first, create it last
    let drop_orders = Table::drop()
        .table(orders::Entity)
        .if_exists()
        .to_owned();
    let drop_customers = Table::drop()
        .table(customers::Entity)
        .if_exists()
        .to_owned();

    db.execute(backend.build(&drop_orders)).await?;
    db.execute(backend.build(&drop_customers)).await?;
    db.execute(backend.build(&schema.create_table_from_entity(customers::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(orders::Entity)))
        .await?;

    tracing::info!("Schema recreated");
    Ok(())
}
