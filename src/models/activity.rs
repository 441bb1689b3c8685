//! Activity entity model
//!
//! This module contains the SeaORM entity model for the activities table,
//! which stores the extracurricular offerings students can sign up for.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Activity entity representing one extracurricular offering
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    /// Unique identifier for the activity (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique display name, used as the lookup key for all operations
    #[sea_orm(unique)]
    pub name: String,

    /// Free-text description of the activity
    pub description: Option<String>,

    /// Human-readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: Option<String>,

    /// Capacity ceiling; 0 means signups are not capacity-limited
    pub max_participants: i32,
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
