//! Activity seeding functionality
//!
//! This module provides functionality to seed the activities table with the
//! school's sample activities on first startup.

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::repositories::{ActivityRepository, CreateActivityRequest};

/// Configuration structure for a seeded activity
struct ActivitySeed {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i32,
}

const SAMPLE_ACTIVITIES: &[ActivitySeed] = &[
    ActivitySeed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
    },
    ActivitySeed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
    },
    ActivitySeed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
    },
];

/// Seeds the activities table with the sample activities
///
/// Seeding only runs against an empty activities table; any pre-existing
/// activity (even an unrelated one) disables it entirely, so the operation
/// is idempotent across restarts.
///
/// # Arguments
///
/// * `db` - Database connection
///
/// # Returns
///
/// Returns a Result indicating success or failure
pub async fn seed_activities(db: &DatabaseConnection) -> Result<()> {
    let repo = ActivityRepository::new(db);

    let existing = repo.count().await?;
    if existing > 0 {
        log::info!(
            "Activities table already has {} entries, skipping seeding",
            existing
        );
        return Ok(());
    }

    for seed in SAMPLE_ACTIVITIES {
        log::info!("Creating activity: {}", seed.name);

        let request = CreateActivityRequest {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            max_participants: seed.max_participants,
        };

        match repo.create(request).await {
            Ok(_) => {
                log::info!("Successfully created activity: {}", seed.name);
            }
            Err(e) => {
                log::error!("Failed to create activity '{}': {}", seed.name, e);
                return Err(e.into());
            }
        }
    }

    log::info!("Activity seeding completed successfully");
    Ok(())
}
