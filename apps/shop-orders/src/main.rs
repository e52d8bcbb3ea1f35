//! Order Search Binary
//!
//! Runs one order search against the configured SQLite database and prints
//! each match as a JSON line.
//!
//! # Usage
//!
//! ```bash
//! ORDER_STATUS=ORDERED MEMBER_NAME=Bob cargo run --bin order-search
//! ```
//!
//! # Environment Variables
//!
//! - `SHOP_ORDERS_CONFIG`: Config file path (default: config.yaml; defaults apply if absent)
//! - `ORDER_STATUS`: ORDERED | CANCELED (optional)
//! - `MEMBER_NAME`: Member name filter (optional)
//! - `RUST_LOG`: Log filter (overrides config)

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use shop_orders::config::{Config, load_config};
use shop_orders::telemetry::init_tracing;
use shop_orders::{OrderDto, OrderSearch, OrderStatus, SqliteSession};

/// Default config file path.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = read_config()?;
    init_tracing(&config.observability.logging).context("Failed to initialize tracing")?;

    let search = search_from_env()?;
    tracing::info!(
        status = ?search.order_status,
        member_name = ?search.member_name,
        "Starting order search"
    );

    let session = SqliteSession::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    session.migrate().await.context("Failed to prepare schema")?;

    let service = config.query.service();
    let orders = service.find_all(&session, &search).await?;

    let mut stdout = std::io::stdout().lock();
    for order in &orders {
        serde_json::to_writer(&mut stdout, &OrderDto::from(order))?;
        writeln!(stdout)?;
    }

    tracing::info!(count = orders.len(), "Order search finished");
    session.close().await;
    Ok(())
}

fn read_config() -> anyhow::Result<Config> {
    let path =
        std::env::var("SHOP_ORDERS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        return Ok(Config::default());
    }
    load_config(Some(&path)).with_context(|| format!("Failed to load config from {path}"))
}

fn search_from_env() -> anyhow::Result<OrderSearch> {
    let mut search = OrderSearch::all();

    let status = std::env::var("ORDER_STATUS").ok();
    if let Some(status) = status.filter(|s| !s.trim().is_empty()) {
        search = search.with_status(status.parse::<OrderStatus>()?);
    }

    if let Ok(name) = std::env::var("MEMBER_NAME") {
        search = search.with_member_name(name);
    }

    Ok(search)
}
