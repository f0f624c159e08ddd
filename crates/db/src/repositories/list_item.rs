//! List item repository.

use std::sync::Arc;

use crate::entities::{list, list_item, List, ListItem};
use crate::media::MediaId;
use crate::{map_db_err, retry};
use chrono::Utc;
use reelist_common::{AppError, AppResult};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

/// Result of an idempotent item add.
///
/// `created` distinguishes "inserted now" from "was already on the list";
/// both are success.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemOutcome {
    /// Whether this call inserted the row.
    pub created: bool,
    /// The membership row, pre-existing or new.
    pub item: list_item::Model,
}

/// List item repository for database operations.
#[derive(Clone)]
pub struct ListItemRepository {
    db: Arc<DatabaseConnection>,
}

impl ListItemRepository {
    /// Create a new list item repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an item by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<list_item::Model>> {
        ListItem::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Items on a list, oldest first.
    pub async fn find_by_list(&self, list_id: i64) -> AppResult<Vec<list_item::Model>> {
        ListItem::find()
            .filter(list_item::Column::ListId.eq(list_id))
            .order_by_asc(list_item::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Idempotently add a media item to a list the actor owns.
    ///
    /// Ownership is re-verified inside the same transaction as the insert so
    /// no window exists between authorization and mutation. An item already
    /// on the list comes back with `created = false`; the composite
    /// uniqueness constraint arbitrates racing adds. Absent and not-owned
    /// lists both surface as not-found.
    pub async fn add(
        &self,
        actor_id: i64,
        list_id: i64,
        media: MediaId,
    ) -> AppResult<AddItemOutcome> {
        retry::with_retry(|| self.add_once(actor_id, list_id, media)).await
    }

    async fn add_once(
        &self,
        actor_id: i64,
        list_id: i64,
        media: MediaId,
    ) -> AppResult<AddItemOutcome> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let list = List::find_by_id(list_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| AppError::ListNotFound(list_id.to_string()))?;

        if list.user_id != actor_id {
            return Err(AppError::ListNotFound(list_id.to_string()));
        }

        let now = Utc::now();
        let (movie_id, series_id) = match media {
            MediaId::Movie(id) => (Some(id), None),
            MediaId::Tv(id) => (None, Some(id)),
        };

        let conflict = match media {
            MediaId::Movie(_) => {
                OnConflict::columns([list_item::Column::ListId, list_item::Column::MovieId])
            }
            MediaId::Tv(_) => {
                OnConflict::columns([list_item::Column::ListId, list_item::Column::SeriesId])
            }
        }
        .do_nothing()
        .to_owned();

        let inserted = ListItem::insert(list_item::ActiveModel {
            list_id: Set(list_id),
            user_id: Set(actor_id),
            media_type: Set(media.media_type()),
            movie_id: Set(movie_id),
            series_id: Set(series_id),
            created_at: Set(now.into()),
            ..Default::default()
        })
        .on_conflict(conflict)
        .exec_without_returning(&txn)
        .await
        .map_err(map_db_err)?;

        let item = Self::filter_media(ListItem::find(), media)
            .filter(list_item::Column::ListId.eq(list_id))
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                AppError::Internal(format!("list item missing after insert on list {list_id}"))
            })?;

        if inserted > 0 {
            List::update_many()
                .col_expr(list::Column::UpdatedAt, Expr::value(now))
                .filter(list::Column::Id.eq(list_id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(AddItemOutcome {
            created: inserted > 0,
            item,
        })
    }

    /// Remove an item the actor owns.
    ///
    /// Returns `None` when the item does not exist *or* belongs to someone
    /// else; the two causes are indistinguishable to the caller.
    pub async fn remove(&self, actor_id: i64, item_id: i64) -> AppResult<Option<list_item::Model>> {
        let Some(item) = self.find_by_id(item_id).await? else {
            return Ok(None);
        };

        if item.user_id != actor_id {
            return Ok(None);
        }

        let result = ListItem::delete_by_id(item_id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok((result.rows_affected > 0).then_some(item))
    }

    fn filter_media(query: Select<ListItem>, media: MediaId) -> Select<ListItem> {
        match media {
            MediaId::Movie(id) => query.filter(list_item::Column::MovieId.eq(id)),
            MediaId::Tv(id) => query.filter(list_item::Column::SeriesId.eq(id)),
        }
    }
}
