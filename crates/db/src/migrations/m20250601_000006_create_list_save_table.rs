//! Create list save table migration.

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
                    .table(ListSave::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListSave::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListSave::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ListSave::ListId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ListSave::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_save_user")
                            .from(ListSave::Table, ListSave::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_save_list")
                            .from(ListSave::Table, ListSave::ListId)
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
                    .name("idx_list_save_user_list")
                    .table(ListSave::Table)
                    .col(ListSave::UserId)
                    .col(ListSave::ListId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: list_id (for counting and cascade)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_save_list_id")
                    .table(ListSave::Table)
                    .col(ListSave::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListSave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListSave {
    Table,
    Id,
    UserId,
    ListId,
    CreatedAt,
}
