//! Database entities.

#![allow(missing_docs)]

pub mod list;
pub mod list_item;
pub mod list_like;
pub mod list_save;
pub mod list_slug_history;
pub mod list_view;
pub mod movie_review;
pub mod tv_review;
pub mod user;

pub use list::Entity as List;
pub use list_item::Entity as ListItem;
pub use list_like::Entity as ListLike;
pub use list_save::Entity as ListSave;
pub use list_slug_history::Entity as ListSlugHistory;
pub use list_view::Entity as ListView;
pub use movie_review::Entity as MovieReview;
pub use tv_review::Entity as TvReview;
pub use user::Entity as User;
