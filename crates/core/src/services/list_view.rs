//! View recording service.

use reelist_common::{hash_identity, AppResult};
use reelist_db::repositories::ListViewRepository;

/// Who is viewing: an authenticated user, a raw remote address, or both.
///
/// The raw address never reaches storage; it is hashed before the repository
/// sees it.
#[derive(Debug, Clone, Default)]
pub struct ViewerIdentity {
    /// Authenticated user, when present.
    pub user_id: Option<i64>,
    /// Remote address as seen by the caller, when present.
    pub raw_address: Option<String>,
}

impl ViewerIdentity {
    /// Whether no identity signal is present at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self
                .raw_address
                .as_ref()
                .is_none_or(|addr| addr.trim().is_empty())
    }
}

/// Service recording unique list views.
#[derive(Clone)]
pub struct ListViewService {
    view_repo: ListViewRepository,
}

impl ListViewService {
    /// Create a new list view service.
    #[must_use]
    pub const fn new(view_repo: ListViewRepository) -> Self {
        Self { view_repo }
    }

    /// Record a view, deduplicated per identity per rolling 24h window.
    ///
    /// An empty identity or a non-positive list id is a silent no-op, never
    /// an error. Returns whether a row was written.
    pub async fn record(&self, list_id: i64, identity: &ViewerIdentity) -> AppResult<bool> {
        if list_id <= 0 || identity.is_empty() {
            return Ok(false);
        }

        let hash = identity
            .raw_address
            .as_deref()
            .filter(|addr| !addr.trim().is_empty())
            .map(hash_identity);

        self.view_repo
            .record(list_id, identity.user_id, hash.as_deref())
            .await
    }

    /// Record a view on a background task.
    ///
    /// The caller's response never waits on the write; failures are logged
    /// and discarded.
    pub fn record_detached(&self, list_id: i64, identity: ViewerIdentity) {
        let service = self.clone();
        tokio::spawn(async move {
            if let Err(error) = service.record(list_id, &identity).await {
                tracing::warn!(list_id, %error, "Failed to record list view");
            }
        });
    }

    /// Total recorded unique views for a list.
    pub async fn view_count(&self, list_id: i64) -> AppResult<u64> {
        self.view_repo.count_for_list(list_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelist_db::entities::list_view;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service(db: MockDatabase) -> ListViewService {
        let conn = Arc::new(db.into_connection());
        ListViewService::new(ListViewRepository::new(conn))
    }

    #[tokio::test]
    async fn test_empty_identity_is_silent_noop() {
        // No query results appended: any database access would fail.
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let recorded = service(db)
            .record(1, &ViewerIdentity::default())
            .await
            .unwrap();

        assert!(!recorded);
    }

    #[tokio::test]
    async fn test_blank_address_counts_as_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let identity = ViewerIdentity {
            user_id: None,
            raw_address: Some("   ".to_string()),
        };
        let recorded = service(db).record(1, &identity).await.unwrap();

        assert!(!recorded);
    }

    #[tokio::test]
    async fn test_non_positive_list_id_is_silent_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let identity = ViewerIdentity {
            user_id: Some(7),
            raw_address: None,
        };
        let recorded = service(db).record(0, &identity).await.unwrap();

        assert!(!recorded);
    }

    #[tokio::test]
    async fn test_fresh_view_recorded_in_one_transaction() {
        // Dedup lookup finds nothing, then the insert returns the new row;
        // both statements run on the same transaction.
        let inserted = list_view::Model {
            id: 1,
            user_id: Some(7),
            list_id: 1,
            ip_address_hash: None,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<list_view::Model>::new()])
            .append_query_results([[inserted]]);

        let identity = ViewerIdentity {
            user_id: Some(7),
            raw_address: None,
        };
        let recorded = service(db).record(1, &identity).await.unwrap();

        assert!(recorded);
    }

    #[tokio::test]
    async fn test_duplicate_within_window_not_recorded() {
        let existing = list_view::Model {
            id: 1,
            user_id: Some(7),
            list_id: 1,
            ip_address_hash: None,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing]]);

        let identity = ViewerIdentity {
            user_id: Some(7),
            raw_address: None,
        };
        let recorded = service(db).record(1, &identity).await.unwrap();

        assert!(!recorded);
    }
}
