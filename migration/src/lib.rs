//! Database migrations for the Mergington activities API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_05_10_000001_create_activities;
mod m2025_05_10_000002_create_students;
mod m2025_05_10_000003_create_signups;
mod m2025_05_24_000100_add_signup_unique_pair;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_05_10_000001_create_activities::Migration),
            Box::new(m2025_05_10_000002_create_students::Migration),
            Box::new(m2025_05_10_000003_create_signups::Migration),
            Box::new(m2025_05_24_000100_add_signup_unique_pair::Migration),
        ]
    }
}
