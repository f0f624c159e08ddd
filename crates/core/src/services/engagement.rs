//! Engagement service: like and save toggles.

use reelist_common::AppResult;
use reelist_db::repositories::{EngagementRepository, ToggleKind};

/// Service for toggling likes and saves on lists.
///
/// Both directions are idempotent and return the list's cached counter for
/// the toggled kind; callers surface that value directly. The join row and
/// the counter move together in one transaction inside the repository.
#[derive(Clone)]
pub struct EngagementService {
    engagement_repo: EngagementRepository,
}

impl EngagementService {
    /// Create a new engagement service.
    #[must_use]
    pub const fn new(engagement_repo: EngagementRepository) -> Self {
        Self { engagement_repo }
    }

    /// Turn a like/save on for the actor, returning the current counter.
    pub async fn toggle_on(
        &self,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<i32> {
        self.engagement_repo.toggle_on(actor_id, list_id, kind).await
    }

    /// Turn a like/save off for the actor, returning the current counter.
    pub async fn toggle_off(
        &self,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<i32> {
        self.engagement_repo.toggle_off(actor_id, list_id, kind).await
    }

    /// Whether the actor currently has the toggle on.
    pub async fn is_toggled(
        &self,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<bool> {
        self.engagement_repo.is_toggled(actor_id, list_id, kind).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelist_db::entities::list;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn test_list(id: i64, like_count: i32, save_count: i32) -> list::Model {
        list::Model {
            id,
            user_id: 1,
            name: "Noir".to_string(),
            slug: "noir".to_string(),
            like_count,
            save_count,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn service(db: MockDatabase) -> EngagementService {
        let conn = Arc::new(db.into_connection());
        EngagementService::new(EngagementRepository::new(conn))
    }

    #[tokio::test]
    async fn test_toggle_on_already_on_keeps_counter() {
        // The conditional insert affects zero rows; the increment is
        // skipped and the returned value is re-read from the stored row.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![test_list(1, 3, 0)], vec![test_list(1, 3, 0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }]);

        let count = service(db).toggle_on(7, 1, ToggleKind::Like).await.unwrap();

        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_toggle_on_duplicate_reports_concurrent_commit() {
        // A racing toggle committed between the first fetch and the insert
        // attempt; the duplicate branch still reports the stored counter,
        // not the stale pre-insert value.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![test_list(1, 3, 0)], vec![test_list(1, 4, 0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }]);

        let count = service(db).toggle_on(7, 1, ToggleKind::Like).await.unwrap();

        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn test_toggle_on_missing_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<list::Model>::new()]);

        let err = service(db)
            .toggle_on(7, 99, ToggleKind::Like)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "LIST_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_toggle_off_absent_pair_keeps_counter() {
        // Delete affects zero rows; the guarded decrement is skipped and
        // the counter is re-read unchanged.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![test_list(1, 0, 5)], vec![test_list(1, 0, 5)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }]);

        let count = service(db).toggle_off(7, 1, ToggleKind::Save).await.unwrap();

        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn test_toggle_on_fresh_pair_increments() {
        // Fetch, insert one row, increment, re-read the bumped counter.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![test_list(1, 3, 0)], vec![test_list(1, 4, 0)]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ]);

        let count = service(db).toggle_on(7, 1, ToggleKind::Like).await.unwrap();

        assert_eq!(count, 4);
    }
}
