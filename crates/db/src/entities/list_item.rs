//! List item entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Media kinds an item can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum MediaType {
    #[sea_orm(string_value = "movie")]
    Movie,
    #[sea_orm(string_value = "tv")]
    Tv,
}

/// Membership of one media item on one list.
///
/// Exactly one of `movie_id` / `series_id` is set, according to `media_type`.
/// Unique per `(list_id, movie_id)` and `(list_id, series_id)`; the
/// constraint, not application code, arbitrates duplicate adds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "list_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub list_id: i64,

    /// Owner of the list at creation time.
    #[sea_orm(indexed)]
    pub user_id: i64,

    pub media_type: MediaType,

    /// External movie identifier, set when `media_type` is `movie`.
    #[sea_orm(nullable)]
    pub movie_id: Option<i32>,

    /// External series identifier, set when `media_type` is `tv`.
    #[sea_orm(nullable)]
    pub series_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::list::Entity",
        from = "Column::ListId",
        to = "super::list::Column::Id",
        on_delete = "Cascade"
    )]
    List,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::List.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
