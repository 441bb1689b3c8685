//! Test utilities for database and router testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, and for building an application router around
//! them.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use mergington_api::config::AppConfig;
use mergington_api::server::{AppState, create_app};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds an application router around the given database, using the test
/// profile configuration.
#[allow(dead_code)]
pub fn test_app(db: DatabaseConnection) -> Router {
    let config = AppConfig {
        profile: "test".to_string(),
        ..Default::default()
    };

    create_app(AppState {
        config: Arc::new(config),
        db,
    })
}
