//! Slug allocation service.

use reelist_common::{slugify, AppError, AppResult, SlugScope, MAX_TITLE_LEN};
use reelist_db::repositories::ListRepository;

/// Service allocating unique slugs from free-text titles.
///
/// Allocation is pure: the caller persists the returned slug. Uniqueness is
/// probed against both live slugs and retired ones, so a slug freed by a
/// rename is never reissued to the same owner.
#[derive(Clone)]
pub struct SlugService {
    list_repo: ListRepository,
    max_attempts: u32,
}

impl SlugService {
    /// Create a new slug service.
    #[must_use]
    pub const fn new(list_repo: ListRepository, max_attempts: u32) -> Self {
        Self {
            list_repo,
            max_attempts,
        }
    }

    /// Allocate a unique slug for `title` within the owner's scope.
    ///
    /// The normalized base is tried first, then `base-1`, `base-2`, … up to
    /// the configured attempt cap. A title that normalizes to nothing is a
    /// validation error; an exhausted suffix space is a conflict.
    pub async fn allocate(
        &self,
        owner_id: i64,
        title: &str,
        scope: SlugScope,
    ) -> AppResult<String> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::Validation(format!(
                "Title must be at most {MAX_TITLE_LEN} characters"
            )));
        }

        let base = slugify(title);
        if base.is_empty() {
            return Err(AppError::Validation(
                "Title must contain at least one ASCII letter or digit".to_string(),
            ));
        }

        if !self.in_use(owner_id, &base, scope).await? {
            return Ok(base);
        }

        for n in 1..=self.max_attempts {
            let candidate = format!("{base}-{n}");
            if !self.in_use(owner_id, &candidate, scope).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::Conflict(format!(
            "No free slug for '{base}' within {} attempts",
            self.max_attempts
        )))
    }

    async fn in_use(&self, owner_id: i64, slug: &str, scope: SlugScope) -> AppResult<bool> {
        match scope {
            SlugScope::List => self.list_repo.slug_in_use(owner_id, slug).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        btreemap! { "num_items" => Value::BigInt(Some(n)) }
    }

    fn service(db: MockDatabase, max_attempts: u32) -> SlugService {
        let conn = Arc::new(db.into_connection());
        SlugService::new(ListRepository::new(conn), max_attempts)
    }

    #[tokio::test]
    async fn test_allocate_free_base() {
        // Live probe 0, history probe 0.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)], vec![count_row(0)]]);

        let slug = service(db, 200)
            .allocate(1, "The Matrix", SlugScope::List)
            .await
            .unwrap();

        assert_eq!(slug, "the-matrix");
    }

    #[tokio::test]
    async fn test_allocate_walks_collision_sequence() {
        // "the-matrix" live-taken, "the-matrix-1" retired-taken,
        // "the-matrix-2" free.
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
            vec![count_row(1)],
            vec![count_row(0)],
            vec![count_row(1)],
            vec![count_row(0)],
            vec![count_row(0)],
        ]);

        let slug = service(db, 200)
            .allocate(1, "The Matrix", SlugScope::List)
            .await
            .unwrap();

        assert_eq!(slug, "the-matrix-2");
    }

    #[tokio::test]
    async fn test_allocate_exhaustion_is_conflict() {
        // Base plus both suffix probes all live-taken with a cap of 2.
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
            vec![count_row(1)],
            vec![count_row(1)],
            vec![count_row(1)],
        ]);

        let err = service(db, 2)
            .allocate(1, "Watchlist", SlugScope::List)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let err = service(db, 200)
            .allocate(1, "   ", SlugScope::List)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unsluggable_title_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let err = service(db, 200)
            .allocate(1, "千と千尋", SlugScope::List)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_title_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);
        let title = "a".repeat(MAX_TITLE_LEN + 1);

        let err = service(db, 200)
            .allocate(1, &title, SlugScope::List)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
