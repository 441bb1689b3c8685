//! Student entity model
//!
//! This module contains the SeaORM entity model for the students table.
//! Students are created lazily on first signup, so only the email is
//! guaranteed to be present.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Student entity identified by email
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Unique identifier for the student (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique email address identifying the student
    #[sea_orm(unique)]
    pub email: String,

    /// Display name (optional, unset for lazily-created records)
    pub name: Option<String>,

    /// School grade (optional)
    pub grade: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::signup::Entity")]
    Signup,
}

impl Related<super::signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Signup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
