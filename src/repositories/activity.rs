//! # Activity Repository
//!
//! This module contains the repository implementation for Activity entities,
//! providing lookup and creation operations for the activity catalog.

use crate::error::RepositoryError;
use crate::models::activity::{
    ActiveModel as ActivityActiveModel, Column, Entity as Activity, Model as ActivityModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

/// Request data for creating a new activity
#[derive(Debug, Clone)]
pub struct CreateActivityRequest {
    /// Unique display name for the activity
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Human-readable schedule
    pub schedule: String,
    /// Capacity ceiling; 0 means unlimited
    pub max_participants: i32,
}

/// Repository for Activity database operations
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    /// Create a new ActivityRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new activity
    pub async fn create(
        &self,
        request: CreateActivityRequest,
    ) -> Result<ActivityModel, RepositoryError> {
        self.validate_name(&request.name)?;

        let activity = ActivityActiveModel {
            name: Set(request.name),
            description: Set(Some(request.description)),
            schedule: Set(Some(request.schedule)),
            max_participants: Set(request.max_participants),
            ..Default::default()
        };

        let result = activity
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Find an activity by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ActivityModel>, RepositoryError> {
        let activity = Activity::find()
            .filter(Column::Name.eq(name))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(activity)
    }

    /// List all activities
    pub async fn list_all(&self) -> Result<Vec<ActivityModel>, RepositoryError> {
        let activities = Activity::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(activities)
    }

    /// Get activity count
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count = Activity::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }

    /// Validate activity name according to schema constraints
    fn validate_name(&self, name: &str) -> Result<(), RepositoryError> {
        if name.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "Activity name cannot be empty",
            ));
        }

        if name.len() > 200 {
            return Err(RepositoryError::validation_error(
                "Activity name cannot exceed 200 characters",
            ));
        }

        Ok(())
    }
}
