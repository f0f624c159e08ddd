//! Core business logic for reelist.

pub mod services;

pub use services::*;
