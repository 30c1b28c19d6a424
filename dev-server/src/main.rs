//! Development server for the admin dashboard UI
//!
//! This binary serves an in-memory stand-in for the booking backend, seeded
//! with guest bookings and admin blocks around today's date.
//!
//! Environment variables can be set directly or loaded from a .env file:
//! - IP_ADDRESS: bind address (defaults to 127.0.0.1)
//! - PORT: bind port (defaults to 8000, 0 for an OS-assigned port)
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Zoned;
use test_helpers::backend::{self, MockBackend, MockConfig};
use test_helpers::mock::DevDataset;
use test_helpers::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info");
    init_subscriber(subscriber)?;

    info!("🚀 Starting booking dashboard development server");

    let mock_backend = MockBackend::default();
    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&mock_backend, Zoned::now().date())?;

    let mut config = MockConfig::from_env()?;
    let server = backend::build(&mut config, mock_backend)?;

    info!("🎯 Development server ready!");
    info!("   API: http://{}:{}", config.ip, config.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    server.await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
