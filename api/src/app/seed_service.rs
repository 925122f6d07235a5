//! Seed service
//!
//! Fills a freshly created schema with synthetic customers and orders so the
//! API has something to browse right after startup.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::domain::entities::{CustomerId, NewCustomer, NewOrder};
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::error::AppError;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Linus", "Margaret", "Niklaus", "Radia",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Hamilton", "Hopper", "Johnson", "Knuth", "Lamarr", "Liskov", "Lovelace", "McCarthy",
    "Perlman", "Ritchie", "Shannon", "Sutherland", "Torvalds", "Turing", "Wirth",
];

const STREETS: &[&str] = &[
    "Maple", "Oak", "Cedar", "Elm", "Willow", "Harbor", "Mill", "Station", "Church", "Park",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Court", "Way"];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Lakewood",
    "Georgetown",
    "Ashland",
    "Milton",
];

const PRODUCTS: &[&str] = &[
    "Mechanical keyboard",
    "USB-C hub",
    "Noise cancelling headphones",
    "Standing desk",
    "Ergonomic chair",
    "27-inch monitor",
    "Webcam",
    "Desk lamp",
    "Laptop sleeve",
    "Wireless mouse",
];

/// Counts of rows written by one seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub orders: usize,
}

/// Service that writes synthetic data through the repositories
pub struct SeedService<CR, OR>
where
    CR: CustomerRepository,
    OR: OrderRepository,
{
    customers: Arc<CR>,
    orders: Arc<OR>,
    rng_seed: Option<u64>,
}

impl<CR, OR> SeedService<CR, OR>
where
    CR: CustomerRepository,
    OR: OrderRepository,
{
    pub fn new(customers: Arc<CR>, orders: Arc<OR>) -> Self {
        Self {
            customers,
            orders,
            rng_seed: None,
        }
    }

    /// Use a fixed RNG seed so repeated runs generate the same data
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Create `customer_count` customers, then `orders_per_customer` orders for each
    pub async fn seed(
        &self,
        customer_count: usize,
        orders_per_customer: usize,
    ) -> Result<SeedSummary, AppError> {
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut customer_ids = Vec::with_capacity(customer_count);
        for n in 0..customer_count {
            let customer = self.customers.create(&fake_customer(&mut rng, n)).await?;
            customer_ids.push(customer.id);
        }

        let mut order_count = 0;
        for customer_id in customer_ids.iter().copied() {
            for _ in 0..orders_per_customer {
                self.orders
                    .create(&fake_order(&mut rng, customer_id))
                    .await?;
                order_count += 1;
            }
        }

        let summary = SeedSummary {
            customers: customer_ids.len(),
            orders: order_count,
        };
        tracing::info!(
            customers = summary.customers,
            orders = summary.orders,
            "Seeded synthetic data"
        );

        Ok(summary)
    }
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Build a customer; `n` keeps generated emails distinct within one run
pub fn fake_customer(rng: &mut impl Rng, n: usize) -> NewCustomer {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let address = format!(
        "{} {} {}, {}",
        rng.gen_range(1..=9999),
        pick(rng, STREETS),
        pick(rng, STREET_SUFFIXES),
        pick(rng, CITIES),
    );

    NewCustomer {
        name: format!("{} {}", first, last),
        address,
        email: format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            n + 1
        ),
    }
}

/// Build an order for `customer_id` costing between 1.00 and 999.99
pub fn fake_order(rng: &mut impl Rng, customer_id: CustomerId) -> NewOrder {
    NewOrder {
        name: pick(rng, PRODUCTS).to_string(),
        cost: Decimal::new(rng.gen_range(100..100_000), 2),
        customer_id,
    }
}
