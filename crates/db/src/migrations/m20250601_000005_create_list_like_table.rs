//! Create list like table migration.

use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_user_table::User;
use super::m20250601_000002_create_list_table::List;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListLike::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListLike::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListLike::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ListLike::ListId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ListLike::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_like_user")
                            .from(ListLike::Table, ListLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_like_list")
                            .from(ListLike::Table, ListLike::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, list_id) - the arbiter for racing toggles
        manager
            .create_index(
                Index::create()
                    .name("idx_list_like_user_list")
                    .table(ListLike::Table)
                    .col(ListLike::UserId)
                    .col(ListLike::ListId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: list_id (for counting and cascade)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_like_list_id")
                    .table(ListLike::Table)
                    .col(ListLike::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListLike {
    Table,
    Id,
    UserId,
    ListId,
    CreatedAt,
}
