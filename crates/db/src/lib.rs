//! Database layer for reelist.

pub mod entities;
pub mod media;
pub mod migrations;
pub mod repositories;
pub mod retry;
pub mod test_utils;

use reelist_common::{AppError, Config};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::log::LevelFilter;

pub use media::MediaId;

/// Initialize database connection.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database.url);

    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await.map_err(map_db_err)
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(map_db_err)
}

/// Map a driver error into the application taxonomy.
///
/// Serialization conflicts (SQLSTATE 40001), deadlocks (40P01) and connection
/// failures become [`AppError::Transient`] so callers can retry; everything
/// else is a plain [`AppError::Database`].
#[must_use]
pub fn map_db_err(err: DbErr) -> AppError {
    let transient = match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        other => {
            let msg = other.to_string();
            msg.contains("40001")
                || msg.contains("40P01")
                || msg.contains("serialization failure")
                || msg.contains("deadlock detected")
        }
    };

    if transient {
        AppError::Transient(err.to_string())
    } else {
        AppError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_map_serialization_failure_is_transient() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "SQLSTATE 40001: could not serialize access".to_string(),
        ));
        assert!(map_db_err(err).is_retryable());
    }

    #[test]
    fn test_map_deadlock_is_transient() {
        let err = DbErr::Exec(RuntimeErr::Internal("deadlock detected".to_string()));
        assert!(map_db_err(err).is_retryable());
    }

    #[test]
    fn test_map_other_errors_are_permanent() {
        let err = DbErr::Exec(RuntimeErr::Internal("syntax error at or near".to_string()));
        assert!(!map_db_err(err).is_retryable());
    }
}
