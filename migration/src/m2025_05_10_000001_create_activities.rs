//! Migration to create the activities table.
//!
//! This migration creates the baseline activities table holding the
//! extracurricular offerings students can sign up for.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Activities::Name)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Activities::Description).text().null())
                    .col(ColumnDef::new(Activities::Schedule).string_len(200).null())
                    .col(
                        ColumnDef::new(Activities::MaxParticipants)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on name for the lookup-by-name path used by every operation
        manager
            .create_index(
                Index::create()
                    .name("idx_activities_name")
                    .table(Activities::Table)
                    .col(Activities::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_activities_name").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    Name,
    Description,
    Schedule,
    MaxParticipants,
}
