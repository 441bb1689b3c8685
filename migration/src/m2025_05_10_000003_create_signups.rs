//! Migration to create the signups table.
//!
//! This migration creates the signups join table linking students to the
//! activities they are enrolled in. Rows are cascade-deleted with their
//! owning activity or student.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Signups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Signups::ActivityId).integer().not_null())
                    .col(ColumnDef::new(Signups::StudentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_activity_id")
                            .from(Signups::Table, Signups::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_student_id")
                            .from(Signups::Table, Signups::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on activity_id for roster listing and capacity counting
        manager
            .create_index(
                Index::create()
                    .name("idx_signups_activity_id")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_signups_student_id")
                    .table(Signups::Table)
                    .col(Signups::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_signups_activity_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_signups_student_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Signups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Signups {
    Table,
    Id,
    ActivityId,
    StudentId,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}
