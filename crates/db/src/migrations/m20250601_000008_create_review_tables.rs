//! Create movie and tv review tables migration.

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
                    .table(MovieReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieReview::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieReview::UserId).big_integer().not_null())
                    .col(ColumnDef::new(MovieReview::MovieId).integer().not_null())
                    .col(ColumnDef::new(MovieReview::Rating).double().not_null())
                    .col(
                        ColumnDef::new(MovieReview::Liked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MovieReview::Watched)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(MovieReview::Review).text().null())
                    .col(
                        ColumnDef::new(MovieReview::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MovieReview::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_review_user")
                            .from(MovieReview::Table, MovieReview::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, movie_id) - one review per user per movie
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_review_user_movie")
                    .table(MovieReview::Table)
                    .col(MovieReview::UserId)
                    .col(MovieReview::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: movie_id (for aggregate reads)
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_review_movie_id")
                    .table(MovieReview::Table)
                    .col(MovieReview::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TvReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TvReview::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TvReview::UserId).big_integer().not_null())
                    .col(ColumnDef::new(TvReview::SeriesId).integer().not_null())
                    .col(ColumnDef::new(TvReview::Rating).double().not_null())
                    .col(
                        ColumnDef::new(TvReview::Liked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TvReview::Watched)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(TvReview::Review).text().null())
                    .col(
                        ColumnDef::new(TvReview::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TvReview::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tv_review_user")
                            .from(TvReview::Table, TvReview::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (user_id, series_id) - one review per user per series
        manager
            .create_index(
                Index::create()
                    .name("idx_tv_review_user_series")
                    .table(TvReview::Table)
                    .col(TvReview::UserId)
                    .col(TvReview::SeriesId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: series_id (for aggregate reads)
        manager
            .create_index(
                Index::create()
                    .name("idx_tv_review_series_id")
                    .table(TvReview::Table)
                    .col(TvReview::SeriesId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TvReview::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MovieReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MovieReview {
    Table,
    Id,
    UserId,
    MovieId,
    Rating,
    Liked,
    Watched,
    Review,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum TvReview {
    Table,
    Id,
    UserId,
    SeriesId,
    Rating,
    Liked,
    Watched,
    Review,
    CreatedAt,
    UpdatedAt,
}
