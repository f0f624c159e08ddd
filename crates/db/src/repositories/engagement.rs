//! Engagement repository: like/save toggles and their cached counters.
//!
//! The join-row mutation and the counter mutation are one atomic unit. No
//! other code path may touch `like_count` / `save_count`; callers toggle
//! through here or not at all.

use std::sync::Arc;

use crate::entities::{list, list_like, list_save, List, ListLike, ListSave};
use crate::{map_db_err, retry};
use chrono::Utc;
use reelist_common::{AppError, AppResult};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};

/// The two toggle-able per-actor actions on a list.
///
/// Resolved statically; there is no runtime string dispatch between the join
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    /// A like, backed by the `list_like` table and `list.like_count`.
    Like,
    /// A save (bookmark), backed by `list_save` and `list.save_count`.
    Save,
}

impl ToggleKind {
    /// The cached counter column on `list` for this kind.
    pub(crate) const fn count_column(self) -> list::Column {
        match self {
            Self::Like => list::Column::LikeCount,
            Self::Save => list::Column::SaveCount,
        }
    }

    /// Read this kind's counter off a list row.
    pub(crate) const fn count_of(self, list: &list::Model) -> i32 {
        match self {
            Self::Like => list.like_count,
            Self::Save => list.save_count,
        }
    }
}

/// Engagement repository for database operations.
#[derive(Clone)]
pub struct EngagementRepository {
    db: Arc<DatabaseConnection>,
}

impl EngagementRepository {
    /// Create a new engagement repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Turn a toggle on, returning the list's current counter for `kind`.
    ///
    /// Idempotent: when the `(actor, list)` pair already exists the counter
    /// is left unchanged. The uniqueness constraint on the join table is
    /// the arbiter under concurrency; the second of two racing inserts
    /// affects zero rows and skips the increment. The returned value is
    /// always read after the arbitration, so both branches report the
    /// stored counter.
    pub async fn toggle_on(&self, actor_id: i64, list_id: i64, kind: ToggleKind) -> AppResult<i32> {
        retry::with_retry(|| self.toggle_on_once(actor_id, list_id, kind)).await
    }

    /// Turn a toggle off, returning the list's current counter for `kind`.
    ///
    /// Idempotent: absent pairs leave the counter unchanged, and the value
    /// is re-read after the delete attempt either way. The decrement is
    /// guarded by `counter > 0`, so pre-existing drift can never drive the
    /// cached value negative.
    pub async fn toggle_off(
        &self,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<i32> {
        retry::with_retry(|| self.toggle_off_once(actor_id, list_id, kind)).await
    }

    /// Whether the actor currently has the toggle on for this list.
    pub async fn is_toggled(&self, actor_id: i64, list_id: i64, kind: ToggleKind) -> AppResult<bool> {
        let count = match kind {
            ToggleKind::Like => {
                ListLike::find()
                    .filter(list_like::Column::UserId.eq(actor_id))
                    .filter(list_like::Column::ListId.eq(list_id))
                    .count(self.db.as_ref())
                    .await
            }
            ToggleKind::Save => {
                ListSave::find()
                    .filter(list_save::Column::UserId.eq(actor_id))
                    .filter(list_save::Column::ListId.eq(list_id))
                    .count(self.db.as_ref())
                    .await
            }
        }
        .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn toggle_on_once(&self, actor_id: i64, list_id: i64, kind: ToggleKind) -> AppResult<i32> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Existence check; the counter is read back after arbitration.
        Self::fetch_list(&txn, list_id).await?;
        let inserted = Self::insert_join_row(&txn, actor_id, list_id, kind).await?;

        if inserted > 0 {
            List::update_many()
                .col_expr(
                    kind.count_column(),
                    Expr::col(kind.count_column()).add(1),
                )
                .filter(list::Column::Id.eq(list_id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        let count = kind.count_of(&Self::fetch_list(&txn, list_id).await?);

        txn.commit().await.map_err(map_db_err)?;

        Ok(count)
    }

    async fn toggle_off_once(
        &self,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<i32> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Self::fetch_list(&txn, list_id).await?;
        let deleted = Self::delete_join_row(&txn, actor_id, list_id, kind).await?;

        if deleted > 0 {
            // Guarded decrement: matches no row once the counter is 0.
            List::update_many()
                .col_expr(
                    kind.count_column(),
                    Expr::col(kind.count_column()).sub(1),
                )
                .filter(list::Column::Id.eq(list_id))
                .filter(kind.count_column().gt(0))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        let count = kind.count_of(&Self::fetch_list(&txn, list_id).await?);

        txn.commit().await.map_err(map_db_err)?;

        Ok(count)
    }

    async fn fetch_list(txn: &DatabaseTransaction, list_id: i64) -> AppResult<list::Model> {
        List::find_by_id(list_id)
            .one(txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| AppError::ListNotFound(list_id.to_string()))
    }

    async fn insert_join_row(
        txn: &DatabaseTransaction,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<u64> {
        let now = Utc::now().into();
        match kind {
            ToggleKind::Like => ListLike::insert(list_like::ActiveModel {
                user_id: Set(actor_id),
                list_id: Set(list_id),
                created_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::columns([list_like::Column::UserId, list_like::Column::ListId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await,
            ToggleKind::Save => ListSave::insert(list_save::ActiveModel {
                user_id: Set(actor_id),
                list_id: Set(list_id),
                created_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::columns([list_save::Column::UserId, list_save::Column::ListId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await,
        }
        .map_err(map_db_err)
    }

    async fn delete_join_row(
        txn: &DatabaseTransaction,
        actor_id: i64,
        list_id: i64,
        kind: ToggleKind,
    ) -> AppResult<u64> {
        let result = match kind {
            ToggleKind::Like => {
                ListLike::delete_many()
                    .filter(list_like::Column::UserId.eq(actor_id))
                    .filter(list_like::Column::ListId.eq(list_id))
                    .exec(txn)
                    .await
            }
            ToggleKind::Save => {
                ListSave::delete_many()
                    .filter(list_save::Column::UserId.eq(actor_id))
                    .filter(list_save::Column::ListId.eq(list_id))
                    .exec(txn)
                    .await
            }
        }
        .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
