//! Review repository.

use std::sync::Arc;

use crate::entities::{movie_review, tv_review, MovieReview, TvReview};
use crate::map_db_err;
use crate::media::MediaId;
use chrono::Utc;
use reelist_common::{AppError, AppResult};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};

/// A review, unified over the movie and TV tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub media: MediaId,
    pub rating: f64,
    pub liked: bool,
    pub watched: bool,
    pub review: Option<String>,
    pub created_at: sea_orm::prelude::DateTimeWithTimeZone,
    pub updated_at: sea_orm::prelude::DateTimeWithTimeZone,
}

impl From<movie_review::Model> for Review {
    fn from(m: movie_review::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            media: MediaId::Movie(m.movie_id),
            rating: m.rating,
            liked: m.liked,
            watched: m.watched,
            review: m.review,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<tv_review::Model> for Review {
    fn from(m: tv_review::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            media: MediaId::Tv(m.series_id),
            rating: m.rating,
            liked: m.liked,
            watched: m.watched,
            review: m.review,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Aggregate rating for one media item.
///
/// `avg_rating` is `None` when nothing has been reviewed — never `NaN`,
/// never `0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAverage {
    pub avg_rating: Option<f64>,
    pub review_count: u64,
}

#[derive(FromQueryResult)]
struct AverageRow {
    avg_rating: Option<f64>,
    review_count: Option<i64>,
}

/// Review repository for database operations.
#[derive(Clone)]
pub struct ReviewRepository {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepository {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Upsert a user's rating for one media item.
    ///
    /// First submission inserts with default flags (`liked = false`,
    /// `watched = true`, no body); a conflicting `(user, media)` pair updates
    /// only `rating` and `updated_at`, leaving everything else untouched.
    pub async fn upsert(&self, user_id: i64, media: MediaId, rating: f64) -> AppResult<Review> {
        let now = Utc::now();

        match media {
            MediaId::Movie(movie_id) => {
                MovieReview::insert(movie_review::ActiveModel {
                    user_id: Set(user_id),
                    movie_id: Set(movie_id),
                    rating: Set(rating),
                    liked: Set(false),
                    watched: Set(true),
                    review: Set(None),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([
                        movie_review::Column::UserId,
                        movie_review::Column::MovieId,
                    ])
                    .update_columns([
                        movie_review::Column::Rating,
                        movie_review::Column::UpdatedAt,
                    ])
                    .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await
                .map_err(map_db_err)?;

                self.find(user_id, media).await?.ok_or_else(|| {
                    AppError::Internal(format!("movie review missing after upsert for {movie_id}"))
                })
            }
            MediaId::Tv(series_id) => {
                TvReview::insert(tv_review::ActiveModel {
                    user_id: Set(user_id),
                    series_id: Set(series_id),
                    rating: Set(rating),
                    liked: Set(false),
                    watched: Set(true),
                    review: Set(None),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([tv_review::Column::UserId, tv_review::Column::SeriesId])
                        .update_columns([tv_review::Column::Rating, tv_review::Column::UpdatedAt])
                        .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await
                .map_err(map_db_err)?;

                self.find(user_id, media).await?.ok_or_else(|| {
                    AppError::Internal(format!("tv review missing after upsert for {series_id}"))
                })
            }
        }
    }

    /// Find a user's review for one media item.
    pub async fn find(&self, user_id: i64, media: MediaId) -> AppResult<Option<Review>> {
        match media {
            MediaId::Movie(movie_id) => MovieReview::find()
                .filter(movie_review::Column::UserId.eq(user_id))
                .filter(movie_review::Column::MovieId.eq(movie_id))
                .one(self.db.as_ref())
                .await
                .map_err(map_db_err)
                .map(|m| m.map(Review::from)),
            MediaId::Tv(series_id) => TvReview::find()
                .filter(tv_review::Column::UserId.eq(user_id))
                .filter(tv_review::Column::SeriesId.eq(series_id))
                .one(self.db.as_ref())
                .await
                .map_err(map_db_err)
                .map(|m| m.map(Review::from)),
        }
    }

    /// Aggregate average rating and review count for one media item.
    pub async fn average_for(&self, media: MediaId) -> AppResult<ReviewAverage> {
        let row = match media {
            MediaId::Movie(movie_id) => {
                MovieReview::find()
                    .select_only()
                    .column_as(Expr::cust("AVG(rating)"), "avg_rating")
                    .column_as(Expr::cust("COUNT(*)"), "review_count")
                    .filter(movie_review::Column::MovieId.eq(movie_id))
                    .into_model::<AverageRow>()
                    .one(self.db.as_ref())
                    .await
            }
            MediaId::Tv(series_id) => {
                TvReview::find()
                    .select_only()
                    .column_as(Expr::cust("AVG(rating)"), "avg_rating")
                    .column_as(Expr::cust("COUNT(*)"), "review_count")
                    .filter(tv_review::Column::SeriesId.eq(series_id))
                    .into_model::<AverageRow>()
                    .one(self.db.as_ref())
                    .await
            }
        }
        .map_err(map_db_err)?;

        Ok(row.map_or(
            ReviewAverage {
                avg_rating: None,
                review_count: 0,
            },
            |r| ReviewAverage {
                avg_rating: r.avg_rating,
                review_count: r.review_count.unwrap_or(0).max(0) as u64,
            },
        ))
    }
}
