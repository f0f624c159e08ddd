//! Movie review entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user's review of one movie. Unique per `(user_id, movie_id)`.
///
/// Upserted, never duplicated: a second submission updates `rating` and
/// `updated_at` only, leaving flags and text untouched.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub user_id: i64,

    /// External movie identifier.
    #[sea_orm(indexed)]
    pub movie_id: i32,

    /// Rating in half-point increments within the configured bounds.
    pub rating: f64,

    pub liked: bool,

    pub watched: bool,

    /// Free-text review body.
    #[sea_orm(nullable)]
    pub review: Option<String>,

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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
