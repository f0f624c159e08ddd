//! Business logic services.

#![allow(missing_docs)]

pub mod engagement;
pub mod list;
pub mod list_item;
pub mod list_view;
pub mod review;
pub mod slug;

pub use engagement::EngagementService;
pub use list::{CreateListInput, ListService, RenameListInput};
pub use list_item::ListItemService;
pub use list_view::{ListViewService, ViewerIdentity};
pub use review::ReviewService;
pub use slug::SlugService;
