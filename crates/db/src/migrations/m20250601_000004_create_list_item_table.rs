//! Create list item table migration.

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
                    .table(ListItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListItem::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListItem::ListId).big_integer().not_null())
                    .col(ColumnDef::new(ListItem::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ListItem::MediaType).string_len(8).not_null())
                    .col(ColumnDef::new(ListItem::MovieId).integer().null())
                    .col(ColumnDef::new(ListItem::SeriesId).integer().null())
                    .col(
                        ColumnDef::new(ListItem::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_item_list")
                            .from(ListItem::Table, ListItem::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_item_user")
                            .from(ListItem::Table, ListItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (list_id, movie_id) - one movie per list.
        // NULL movie_id rows (tv items) never collide here.
        manager
            .create_index(
                Index::create()
                    .name("idx_list_item_list_movie")
                    .table(ListItem::Table)
                    .col(ListItem::ListId)
                    .col(ListItem::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unique index: (list_id, series_id) - one series per list
        manager
            .create_index(
                Index::create()
                    .name("idx_list_item_list_series")
                    .table(ListItem::Table)
                    .col(ListItem::ListId)
                    .col(ListItem::SeriesId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: list_id (for listing items)
        manager
            .create_index(
                Index::create()
                    .name("idx_list_item_list_id")
                    .table(ListItem::Table)
                    .col(ListItem::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListItem {
    Table,
    Id,
    ListId,
    UserId,
    MediaType,
    MovieId,
    SeriesId,
    CreatedAt,
}
