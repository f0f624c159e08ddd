//! List slug history entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A retired slug, written exactly once per successful rename.
///
/// Append-only: rows are never mutated or deleted except by cascade when the
/// owning list is removed. The slug allocator consults `old_slug` so retired
/// names are never reissued to the same owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "list_slug_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub list_id: i64,

    #[sea_orm(indexed)]
    pub old_slug: String,

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
}

impl Related<super::list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::List.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
