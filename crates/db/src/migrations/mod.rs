//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_list_table;
mod m20250601_000003_create_list_slug_history_table;
mod m20250601_000004_create_list_item_table;
mod m20250601_000005_create_list_like_table;
mod m20250601_000006_create_list_save_table;
mod m20250601_000007_create_list_view_table;
mod m20250601_000008_create_review_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_list_table::Migration),
            Box::new(m20250601_000003_create_list_slug_history_table::Migration),
            Box::new(m20250601_000004_create_list_item_table::Migration),
            Box::new(m20250601_000005_create_list_like_table::Migration),
            Box::new(m20250601_000006_create_list_save_table::Migration),
            Box::new(m20250601_000007_create_list_view_table::Migration),
            Box::new(m20250601_000008_create_review_tables::Migration),
        ]
    }
}
