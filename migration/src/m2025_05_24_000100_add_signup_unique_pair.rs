//! Adds a unique index preventing duplicate (activity, student) signups.
//!
//! The application checks for an existing signup before inserting, but two
//! concurrent requests can both pass that check. The index makes the loser
//! of that race fail at the database instead of producing a duplicate row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_signups_activity_student_unique")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .col(Signups::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_signups_activity_student_unique")
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Signups {
    Table,
    ActivityId,
    StudentId,
}
