//! List view repository.

use std::sync::Arc;

use crate::entities::{list_view, ListView};
use crate::{map_db_err, retry};
use chrono::{Duration, Utc};
use reelist_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};

/// Rolling dedup window for unique views.
const DEDUP_WINDOW_HOURS: i64 = 24;

/// List view repository for database operations.
#[derive(Clone)]
pub struct ListViewRepository {
    db: Arc<DatabaseConnection>,
}

impl ListViewRepository {
    /// Create a new list view repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Record a unique view, deduplicated per identity per rolling window.
    ///
    /// A view counts at most once per 24 hours for any row matching the
    /// given `user_id` OR `ip_hash` — whichever components are present. At
    /// least one must be `Some`; the service layer guarantees that. The
    /// lookup and the insert share one transaction, retried on transient
    /// serialization failures. Returns whether a row was written.
    pub async fn record(
        &self,
        list_id: i64,
        user_id: Option<i64>,
        ip_hash: Option<&str>,
    ) -> AppResult<bool> {
        retry::with_retry(|| self.record_once(list_id, user_id, ip_hash)).await
    }

    async fn record_once(
        &self,
        list_id: i64,
        user_id: Option<i64>,
        ip_hash: Option<&str>,
    ) -> AppResult<bool> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let cutoff = Utc::now() - Duration::hours(DEDUP_WINDOW_HOURS);

        let mut identity = Condition::any();
        if let Some(uid) = user_id {
            identity = identity.add(list_view::Column::UserId.eq(uid));
        }
        if let Some(hash) = ip_hash {
            identity = identity.add(list_view::Column::IpAddressHash.eq(hash));
        }

        let existing = ListView::find()
            .filter(list_view::Column::ListId.eq(list_id))
            .filter(list_view::Column::CreatedAt.gt(cutoff))
            .filter(identity)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if existing.is_some() {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(false);
        }

        list_view::ActiveModel {
            user_id: Set(user_id),
            list_id: Set(list_id),
            ip_address_hash: Set(ip_hash.map(ToString::to_string)),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(true)
    }

    /// Total recorded unique views for a list.
    pub async fn count_for_list(&self, list_id: i64) -> AppResult<u64> {
        ListView::find()
            .filter(list_view::Column::ListId.eq(list_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
