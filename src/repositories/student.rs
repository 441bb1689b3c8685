//! # Student Repository
//!
//! Lookup and lazy creation of student records. A student row carries only
//! an email when created through the signup path.

use crate::error::RepositoryError;
use crate::models::student::{
    ActiveModel as StudentActiveModel, Column, Entity as Student, Model as StudentModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

/// Repository for Student database operations
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Create a new StudentRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a student by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<StudentModel>, RepositoryError> {
        let student = Student::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(student)
    }

    /// Create a student record carrying only the given email.
    ///
    /// Name and grade stay unset; the record exists so signups can reference it.
    pub async fn create_with_email(&self, email: &str) -> Result<StudentModel, RepositoryError> {
        let student = StudentActiveModel {
            email: Set(email.to_string()),
            ..Default::default()
        };

        let result = student
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Get student count
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count = Student::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }
}
