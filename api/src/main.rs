//! OrderDesk API Server
//!
//! A small CRUD service over customers and the orders that reference them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{SqliteCustomerRepository, SqliteOrderRepository};
use app::{CustomerService, OrderService, SeedService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<SqliteCustomerRepository>>,
    pub order_service: Arc<OrderService<SqliteOrderRepository>>,
}

impl AppState {
    pub fn new(
        customer_repo: Arc<SqliteCustomerRepository>,
        order_repo: Arc<SqliteOrderRepository>,
    ) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(customer_repo)),
            order_service: Arc::new(OrderService::new(order_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every endpoint and the shared middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Customers
        .route("/get-customers/", get(handlers::list_customers))
        .route("/get-customer-by-id/:id", get(handlers::get_customer_by_id))
        .route("/create-customer/", post(handlers::create_customer))
        .route("/update-customer/", put(handlers::update_customer))
        .route(
            "/get-customer-with-orders/:id",
            get(handlers::get_customer_with_orders),
        )
        // Orders
        .route("/get-orders/", get(handlers::list_orders))
        .route("/get-order-by-id/:id", get(handlers::get_order_by_id))
        .route("/create-order/", post(handlers::create_order))
        .route("/update-order/", put(handlers::update_order))
        .route(
            "/get-orders-by-customer-id/:id",
            get(handlers::list_orders_by_customer),
        )
        // REST-style customer resource
        .route(
            "/customers/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customers/:id",
            get(handlers::get_customer_by_id)
                .put(handlers::replace_customer)
                .delete(handlers::delete_customer),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orderdesk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OrderDesk API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to SQLite and start from an empty schema
    tracing::info!("Connecting to database...");
    let db = adapters::sqlite::connect(&config)
        .await
        .context("Failed to connect to database")?;
    adapters::sqlite::recreate_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database ready");

    // Create adapters
    let customer_repo = Arc::new(SqliteCustomerRepository::new(db.clone()));
    let order_repo = Arc::new(SqliteOrderRepository::new(db.clone()));

    if config.seed_customers > 0 {
        let mut seeder = SeedService::new(customer_repo.clone(), order_repo.clone());
        if let Some(seed) = config.seed_rng {
            seeder = seeder.with_rng_seed(seed);
        }
        seeder
            .seed(config.seed_customers, config.seed_orders_per_customer)
            .await
            .context("Failed to seed database")?;
    }

    let app = build_router(AppState::new(customer_repo, order_repo));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await.context("Failed to close database")?;
    tracing::info!("Shut down");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
