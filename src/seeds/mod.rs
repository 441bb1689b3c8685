//! Database seeding functionality
//!
//! This module provides functionality to seed the database with initial data
//! when the application starts.

pub mod activity;

pub use activity::seed_activities;
