//! List view entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One recorded unique view of a list.
///
/// At least one of `user_id` / `ip_address_hash` is set. Rows are insert-only
/// and used for dedup lookups over a rolling 24-hour window; raw addresses are
/// never stored, only their one-way hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "list_view")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed, nullable)]
    pub user_id: Option<i64>,

    #[sea_orm(indexed)]
    pub list_id: i64,

    #[sea_orm(indexed, nullable)]
    pub ip_address_hash: Option<String>,

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

impl ActiveModelBehavior for ActiveModel {}
