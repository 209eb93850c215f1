//! Taskboard Client - Main Entry Point
//!
//! Prints the sidebar, mobile menu and route decisions for the configured
//! profile.

use anyhow::Result;
use tracing::info;

use tb_client::{App, Config};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tb_client=debug,tb_access=info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load configuration
    let config = Config::from_env()?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Taskboard Client");

    let app = App::load(config)?;
    println!("{}", app.report());

    Ok(())
}
