//! List entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user-owned named collection of media items.
///
/// `like_count` and `save_count` are cached projections of the corresponding
/// join tables. They are only ever mutated in the same transaction as the
/// join row, through the engagement repository.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owning user.
    #[sea_orm(indexed)]
    pub user_id: i64,

    /// Display name, free text.
    pub name: String,

    /// URL-safe name, unique per owner among live lists.
    pub slug: String,

    /// Cached count of `list_like` rows. Never negative.
    pub like_count: i32,

    /// Cached count of `list_save` rows. Never negative.
    pub save_count: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::list_item::Entity")]
    Item,
    #[sea_orm(has_many = "super::list_like::Entity")]
    Like,
    #[sea_orm(has_many = "super::list_save::Entity")]
    Save,
    #[sea_orm(has_many = "super::list_view::Entity")]
    View,
    #[sea_orm(has_many = "super::list_slug_history::Entity")]
    SlugHistory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
