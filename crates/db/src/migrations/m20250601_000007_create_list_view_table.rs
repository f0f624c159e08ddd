//! Create list view table migration.

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
                    .table(ListView::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListView::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListView::UserId).big_integer().null())
                    .col(ColumnDef::new(ListView::ListId).big_integer().not_null())
                    .col(ColumnDef::new(ListView::IpAddressHash).string_len(64).null())
                    .col(
                        ColumnDef::new(ListView::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_view_list")
                            .from(ListView::Table, ListView::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_view_user")
                            .from(ListView::Table, ListView::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(
                        Expr::col(ListView::UserId)
                            .is_not_null()
                            .or(Expr::col(ListView::IpAddressHash).is_not_null()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: (list_id, created_at) - the rolling-window dedup lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_list_view_list_created")
                    .table(ListView::Table)
                    .col(ListView::ListId)
                    .col(ListView::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListView::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListView {
    Table,
    Id,
    UserId,
    ListId,
    IpAddressHash,
    CreatedAt,
}
