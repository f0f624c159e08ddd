//! Create list slug history table migration.

use sea_orm_migration::prelude::*;

use super::m20250601_000002_create_list_table::List;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListSlugHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListSlugHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ListSlugHistory::ListId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListSlugHistory::OldSlug)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListSlugHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_slug_history_list")
                            .from(ListSlugHistory::Table, ListSlugHistory::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: old_slug (for allocation probes against retired slugs)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_slug_history_old_slug")
                    .table(ListSlugHistory::Table)
                    .col(ListSlugHistory::OldSlug)
                    .to_owned(),
            )
            .await?;

        // Index: list_id (for cascade and history listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_slug_history_list_id")
                    .table(ListSlugHistory::Table)
                    .col(ListSlugHistory::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListSlugHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListSlugHistory {
    Table,
    Id,
    ListId,
    OldSlug,
    CreatedAt,
}
