//! List repository.

use std::sync::Arc;

use crate::entities::{list, list_slug_history, List, ListSlugHistory};
use crate::{map_db_err, retry};
use chrono::Utc;
use reelist_common::{AppError, AppResult};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

/// List repository for database operations.
#[derive(Clone)]
pub struct ListRepository {
    db: Arc<DatabaseConnection>,
}

impl ListRepository {
    /// Create a new list repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a list by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<list::Model>> {
        List::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Get a list by ID, verifying ownership.
    ///
    /// Absent and not-owned collapse into the same not-found error so that
    /// existence is never confirmed to non-owners.
    pub async fn get_owned(&self, id: i64, actor_id: i64) -> AppResult<list::Model> {
        let list = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ListNotFound(id.to_string()))?;

        if list.user_id != actor_id {
            return Err(AppError::ListNotFound(id.to_string()));
        }

        Ok(list)
    }

    /// Find a user's list by its live slug.
    pub async fn find_by_slug(&self, user_id: i64, slug: &str) -> AppResult<Option<list::Model>> {
        List::find()
            .filter(list::Column::UserId.eq(user_id))
            .filter(list::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find all lists for a user, most recently updated first.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<list::Model>> {
        List::find()
            .filter(list::Column::UserId.eq(user_id))
            .order_by_desc(list::Column::UpdatedAt)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Whether `slug` is taken for this owner, among live or retired slugs.
    ///
    /// Retired slugs are preserved for redirects, so they are never reissued
    /// to the same owner.
    pub async fn slug_in_use(&self, user_id: i64, slug: &str) -> AppResult<bool> {
        let live = List::find()
            .filter(list::Column::UserId.eq(user_id))
            .filter(list::Column::Slug.eq(slug))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if live > 0 {
            return Ok(true);
        }

        let retired = ListSlugHistory::find()
            .filter(list_slug_history::Column::OldSlug.eq(slug))
            .join(JoinType::InnerJoin, list_slug_history::Relation::List.def())
            .filter(list::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(retired > 0)
    }

    /// Create a new list with an already-allocated slug.
    pub async fn create(&self, user_id: i64, name: &str, slug: &str) -> AppResult<list::Model> {
        let now = Utc::now();
        list::ActiveModel {
            user_id: Set(user_id),
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            like_count: Set(0),
            save_count: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .map_err(map_db_err)
    }

    /// Rename a list, retiring its current slug into the history table.
    ///
    /// One transaction: exactly one history row carrying the prior slug is
    /// written before the new name/slug commit. Retried on transient
    /// serialization failures.
    pub async fn rename(&self, list_id: i64, name: &str, new_slug: &str) -> AppResult<list::Model> {
        retry::with_retry(|| self.rename_once(list_id, name, new_slug)).await
    }

    async fn rename_once(&self, list_id: i64, name: &str, new_slug: &str) -> AppResult<list::Model> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let list = List::find_by_id(list_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| AppError::ListNotFound(list_id.to_string()))?;

        let now = Utc::now();

        list_slug_history::ActiveModel {
            list_id: Set(list_id),
            old_slug: Set(list.slug),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        List::update_many()
            .col_expr(list::Column::Name, Expr::value(name))
            .col_expr(list::Column::Slug, Expr::value(new_slug))
            .col_expr(list::Column::UpdatedAt, Expr::value(now))
            .filter(list::Column::Id.eq(list_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let fresh = List::find_by_id(list_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| AppError::Internal(format!("list {list_id} vanished during rename")))?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(fresh)
    }

    /// Retired slugs for a list, oldest first.
    pub async fn slug_history(&self, list_id: i64) -> AppResult<Vec<list_slug_history::Model>> {
        ListSlugHistory::find()
            .filter(list_slug_history::Column::ListId.eq(list_id))
            .order_by_asc(list_slug_history::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Delete a list. Items, likes, saves, views and slug history cascade.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        List::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
