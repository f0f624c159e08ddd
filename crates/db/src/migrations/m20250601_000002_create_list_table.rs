//! Create list table migration.

use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(List::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(List::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(List::UserId).big_integer().not_null())
                    .col(ColumnDef::new(List::Name).string_len(100).not_null())
                    .col(ColumnDef::new(List::Slug).string_len(120).not_null())
                    .col(
                        ColumnDef::new(List::LikeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(List::SaveCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(List::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(List::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_user")
                            .from(List::Table, List::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, slug) - live slugs unique per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_list_user_slug")
                    .table(List::Table)
                    .col(List::UserId)
                    .col(List::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's lists)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_user_id")
                    .table(List::Table)
                    .col(List::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(List::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum List {
    Table,
    Id,
    UserId,
    Name,
    Slug,
    LikeCount,
    SaveCount,
    CreatedAt,
    UpdatedAt,
}
