use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://orderdesk.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Log every SQL statement through sqlx
    pub database_echo: bool,
    /// Number of synthetic customers created at startup (0 disables seeding)
    pub seed_customers: usize,
    pub seed_orders_per_customer: usize,
    /// Fixed RNG seed for repeatable synthetic data
    pub seed_rng: Option<u64>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_echo: env::var("DATABASE_ECHO")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            seed_customers: parse_or("SEED_CUSTOMERS", 10),
            seed_orders_per_customer: parse_or("SEED_ORDERS_PER_CUSTOMER", 3),
            seed_rng: env::var("SEED_RNG").ok().and_then(|v| v.trim().parse().ok()),
            port: parse_or("PORT", 8080),
        }
    }

    /// Check if the database lives only in process memory
    pub fn is_in_memory_database(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_echo: false,
            seed_customers: 10,
            seed_orders_per_customer: 3,
            seed_rng: None,
            port: 8080,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
