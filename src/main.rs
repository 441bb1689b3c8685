//! # Mergington High School API Main Entry Point
//!
//! This is the main entry point for the Mergington activities API service.

use mergington_api::{config::ConfigLoader, db, seeds, server::run_server, telemetry};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "active configuration");
    }

    // Connect, ensure the schema exists, and seed sample activities if none exist
    let db = db::init_pool(&config).await?;
    db::health_check(&db).await?;
    Migrator::up(&db, None).await?;
    seeds::seed_activities(&db).await?;

    // Start the server with the loaded configuration
    run_server(config, db).await
}
