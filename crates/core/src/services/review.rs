//! Review service.

use reelist_common::{AppConfig, AppError, AppResult};
use reelist_db::repositories::{Review, ReviewAverage, ReviewRepository};
use reelist_db::MediaId;

/// Service for rating movies and TV series.
///
/// Ratings arrive as raw decimal strings and are validated against the
/// configured bounds and the half-point step before touching storage.
#[derive(Clone)]
pub struct ReviewService {
    review_repo: ReviewRepository,
    rating_min: f64,
    rating_max: f64,
}

impl ReviewService {
    /// Create a new review service with bounds from configuration.
    #[must_use]
    pub const fn new(review_repo: ReviewRepository, config: &AppConfig) -> Self {
        Self {
            review_repo,
            rating_min: config.rating_min,
            rating_max: config.rating_max,
        }
    }

    /// Parse and validate a raw rating string.
    ///
    /// Rejects anything non-finite, outside the configured bounds, or off
    /// the half-point grid.
    pub fn parse_rating(&self, raw: &str) -> AppResult<f64> {
        let rating: f64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("Rating '{raw}' is not a number")))?;

        if !rating.is_finite() {
            return Err(AppError::Validation(format!(
                "Rating '{raw}' is not a finite number"
            )));
        }

        if rating < self.rating_min || rating > self.rating_max {
            return Err(AppError::Validation(format!(
                "Rating must be between {} and {}",
                self.rating_min, self.rating_max
            )));
        }

        if (rating * 2.0).fract() != 0.0 {
            return Err(AppError::Validation(
                "Rating must be a half-point step".to_string(),
            ));
        }

        Ok(rating)
    }

    /// Upsert a user's rating for one media item.
    ///
    /// The first submission creates the review with default flags; a repeat
    /// updates only the rating and its timestamp.
    pub async fn upsert(&self, user_id: i64, media: MediaId, raw_rating: &str) -> AppResult<Review> {
        let rating = self.parse_rating(raw_rating)?;
        self.review_repo.upsert(user_id, media, rating).await
    }

    /// A user's review for one media item, if any.
    pub async fn get(&self, user_id: i64, media: MediaId) -> AppResult<Option<Review>> {
        self.review_repo.find(user_id, media).await
    }

    /// Aggregate average rating and review count for one media item.
    pub async fn average_for(&self, media: MediaId) -> AppResult<ReviewAverage> {
        self.review_repo.average_for(media).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maplit::btreemap;
    use reelist_db::entities::movie_review;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::sync::Arc;

    fn service(db: MockDatabase) -> ReviewService {
        let conn = Arc::new(db.into_connection());
        ReviewService::new(ReviewRepository::new(conn), &AppConfig::default())
    }

    fn test_review(id: i64, user_id: i64, movie_id: i32, rating: f64) -> movie_review::Model {
        movie_review::Model {
            id,
            user_id,
            movie_id,
            rating,
            liked: false,
            watched: true,
            review: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_parse_rating_accepts_half_steps() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres));
        assert_eq!(svc.parse_rating("7.5").unwrap(), 7.5);
        assert_eq!(svc.parse_rating("0.5").unwrap(), 0.5);
        assert_eq!(svc.parse_rating("10").unwrap(), 10.0);
        assert_eq!(svc.parse_rating(" 8 ").unwrap(), 8.0);
    }

    #[test]
    fn test_parse_rating_rejects_off_grid() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres));
        assert_eq!(
            svc.parse_rating("7.25").unwrap_err().error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            svc.parse_rating("9.9").unwrap_err().error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_parse_rating_rejects_out_of_bounds() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres));
        assert!(svc.parse_rating("0").is_err());
        assert!(svc.parse_rating("10.5").is_err());
        assert!(svc.parse_rating("-3").is_err());
    }

    #[test]
    fn test_parse_rating_rejects_garbage() {
        let svc = service(MockDatabase::new(DatabaseBackend::Postgres));
        assert!(svc.parse_rating("great").is_err());
        assert!(svc.parse_rating("").is_err());
        assert!(svc.parse_rating("NaN").is_err());
        assert!(svc.parse_rating("inf").is_err());
    }

    #[tokio::test]
    async fn test_upsert_returns_stored_review() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_review(1, 7, 603, 7.5)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }]);

        let review = service(db).upsert(7, MediaId::Movie(603), "7.5").await.unwrap();

        assert_eq!(review.rating, 7.5);
        assert_eq!(review.media, MediaId::Movie(603));
        assert!(!review.liked);
        assert!(review.watched);
    }

    #[tokio::test]
    async fn test_upsert_invalid_rating_never_hits_storage() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let err = service(db)
            .upsert(7, MediaId::Movie(603), "7.3")
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_average_for_single_review() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            btreemap! {
                "avg_rating" => Value::Double(Some(7.5)),
                "review_count" => Value::BigInt(Some(1)),
            },
        ]]);

        let avg = service(db).average_for(MediaId::Movie(603)).await.unwrap();

        assert_eq!(avg.avg_rating, Some(7.5));
        assert_eq!(avg.review_count, 1);
    }

    #[tokio::test]
    async fn test_average_for_unreviewed_is_none_not_zero() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            btreemap! {
                "avg_rating" => Value::Double(None),
                "review_count" => Value::BigInt(Some(0)),
            },
        ]]);

        let avg = service(db).average_for(MediaId::Tv(1396)).await.unwrap();

        assert_eq!(avg.avg_rating, None);
        assert_eq!(avg.review_count, 0);
    }
}
