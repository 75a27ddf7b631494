//! Development server for booking details UI development
//!
//! Serves the bookings API from memory with a small sample dataset.
//!
//! Usage: cargo run -p dev-server
//!
//! `IP_ADDRESS` and `PORT` (from the environment or a `.env` file) choose
//! where to listen; the defaults are 127.0.0.1 and an OS-assigned port.

use anyhow::Result;
use test_helpers::mock::DevDataset;
use test_helpers::{Fixtures, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber);

    info!("🚀 Starting bookings development server");

    let ip = std::env::var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 0,
    };

    let fixtures = Fixtures::default();
    let (server, port) = server::build(fixtures.clone(), &ip, port)?;
    let server = tokio::spawn(server);

    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&fixtures);

    info!("🎯 Development server ready!");
    info!("   API: http://{ip}:{port}");
    info!("   UI:  cd ui && BACKEND_URL=http://{ip}:{port} trunk serve");
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        result = server => {
            if let Err(e) = result? {
                telemetry::log_error(e);
            }
        }
    }
    info!("🛑 Shutting down development server");
    Ok(())
}
