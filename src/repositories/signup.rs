//! # Signup Repository
//!
//! This module contains the repository implementation for Signup entities:
//! pair lookup, capacity counting, roster listing, creation and deletion.

use crate::error::RepositoryError;
use crate::models::signup::{
    ActiveModel as SignupActiveModel, Column, Entity as Signup, Model as SignupModel,
};
use crate::models::student::Entity as Student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};

/// Repository for Signup database operations
pub struct SignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupRepository<'a> {
    /// Create a new SignupRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find the signup for an (activity, student) pair, if any
    pub async fn find_by_pair(
        &self,
        activity_id: i32,
        student_id: i32,
    ) -> Result<Option<SignupModel>, RepositoryError> {
        let signup = Signup::find()
            .filter(Column::ActivityId.eq(activity_id))
            .filter(Column::StudentId.eq(student_id))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(signup)
    }

    /// Count current signups for an activity (the capacity check input)
    pub async fn count_for_activity(&self, activity_id: i32) -> Result<u64, RepositoryError> {
        let count = Signup::find()
            .filter(Column::ActivityId.eq(activity_id))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }

    /// List participant emails for an activity by following each signup to its student
    pub async fn participant_emails(
        &self,
        activity_id: i32,
    ) -> Result<Vec<String>, RepositoryError> {
        let rows = Signup::find()
            .filter(Column::ActivityId.eq(activity_id))
            .find_also_related(Student)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, student)| student.map(|s| s.email))
            .collect())
    }

    /// Create a signup linking a student to an activity
    pub async fn create(
        &self,
        activity_id: i32,
        student_id: i32,
    ) -> Result<SignupModel, RepositoryError> {
        let signup = SignupActiveModel {
            activity_id: Set(activity_id),
            student_id: Set(student_id),
            ..Default::default()
        };

        let result = signup
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete a signup
    pub async fn delete(&self, signup: SignupModel) -> Result<(), RepositoryError> {
        signup
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }
}
