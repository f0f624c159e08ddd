//! List membership service.

use reelist_common::AppResult;
use reelist_db::entities::list_item;
use reelist_db::repositories::{AddItemOutcome, ListItemRepository};
use reelist_db::MediaId;

/// Service for adding media items to lists and removing them.
#[derive(Clone)]
pub struct ListItemService {
    item_repo: ListItemRepository,
}

impl ListItemService {
    /// Create a new list item service.
    #[must_use]
    pub const fn new(item_repo: ListItemRepository) -> Self {
        Self { item_repo }
    }

    /// Idempotently add a media item to a list the actor owns.
    ///
    /// The outcome's `created` flag distinguishes a fresh insert from a
    /// duplicate; both are success. Absent and not-owned lists read as
    /// not-found.
    pub async fn add_item(
        &self,
        actor_id: i64,
        list_id: i64,
        media: MediaId,
    ) -> AppResult<AddItemOutcome> {
        self.item_repo.add(actor_id, list_id, media).await
    }

    /// Remove an item the actor owns.
    ///
    /// `None` covers both a missing item and someone else's item.
    pub async fn remove_item(
        &self,
        actor_id: i64,
        item_id: i64,
    ) -> AppResult<Option<list_item::Model>> {
        self.item_repo.remove(actor_id, item_id).await
    }

    /// Items on a list, oldest first.
    pub async fn list_items(&self, list_id: i64) -> AppResult<Vec<list_item::Model>> {
        self.item_repo.find_by_list(list_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelist_db::entities::list;
    use reelist_db::entities::list_item::MediaType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn test_list(id: i64, user_id: i64) -> list::Model {
        list::Model {
            id,
            user_id,
            name: "Noir".to_string(),
            slug: "noir".to_string(),
            like_count: 0,
            save_count: 0,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn test_item(id: i64, list_id: i64, user_id: i64, movie_id: i32) -> list_item::Model {
        list_item::Model {
            id,
            list_id,
            user_id,
            media_type: MediaType::Movie,
            movie_id: Some(movie_id),
            series_id: None,
            created_at: Utc::now().into(),
        }
    }

    fn service(db: MockDatabase) -> ListItemService {
        let conn = Arc::new(db.into_connection());
        ListItemService::new(ListItemRepository::new(conn))
    }

    #[tokio::test]
    async fn test_add_item_duplicate_reports_existing_row() {
        // Ownership fetch, zero-row conditional insert, read-back of the
        // pre-existing row; the parent's updated_at is left alone.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![test_list(1, 7)]])
            .append_query_results([vec![test_item(10, 1, 7, 603)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }]);

        let outcome = service(db).add_item(7, 1, MediaId::Movie(603)).await.unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.item.id, 10);
        assert_eq!(outcome.item.movie_id, Some(603));
    }

    #[tokio::test]
    async fn test_add_item_by_non_owner_reads_as_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_list(1, 7)]]);

        let err = service(db)
            .add_item(8, 1, MediaId::Movie(603))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "LIST_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_add_item_missing_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<list::Model>::new()]);

        let err = service(db)
            .add_item(7, 99, MediaId::Tv(1396))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "LIST_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_remove_item_by_non_owner_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_item(10, 1, 7, 603)]]);

        let removed = service(db).remove_item(8, 10).await.unwrap();

        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_item_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<list_item::Model>::new()]);

        let removed = service(db).remove_item(7, 99).await.unwrap();

        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn test_list_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_item(10, 1, 7, 603), test_item(11, 1, 7, 550)]]);

        let items = service(db).list_items(1).await.unwrap();

        assert_eq!(items.len(), 2);
    }
}
