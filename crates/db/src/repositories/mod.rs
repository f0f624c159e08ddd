//! Database repositories.
//!
//! All SQL lives here. Multi-statement operations (counter toggles, renames,
//! idempotent item adds) each run inside a single transaction so partial
//! application is impossible.

#![allow(missing_docs)]

pub mod engagement;
pub mod list;
pub mod list_item;
pub mod list_view;
pub mod review;
pub mod user;

pub use engagement::{EngagementRepository, ToggleKind};
pub use list::ListRepository;
pub use list_item::{AddItemOutcome, ListItemRepository};
pub use list_view::ListViewRepository;
pub use review::{Review, ReviewAverage, ReviewRepository};
pub use user::UserRepository;
