//! Common utilities and shared types for reelist.
//!
//! This crate provides foundational components used across all reelist crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Identity hashing**: One-way hashing of raw identity tokens via [`hash_identity`]
//! - **Slug normalization**: URL-safe name derivation via [`slugify`]
//!
//! # Example
//!
//! ```no_run
//! use reelist_common::{Config, AppResult, slug::slugify};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let base = slugify("The Matrix");
//!     assert_eq!(base, "the-matrix");
//!     println!("listening on port {}", config.server.port);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod slug;

pub use config::{AppConfig, Config};
pub use error::{AppError, AppResult};
pub use hash::hash_identity;
pub use slug::{slugify, SlugScope, MAX_TITLE_LEN};
