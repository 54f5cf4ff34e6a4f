//! Database connection pool and utility functions.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Schema, Statement};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::entities::prelude::*;

/// Create a new database connection with configured pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Test connection string without keeping the connection.
pub async fn test_connection_string(conn_str: &str) -> Result<(), String> {
    let conn = Database::connect(conn_str).await.map_err(|e| e.to_string())?;

    conn.ping().await.map_err(|e| e.to_string())
}

/// Get the database server version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => "SELECT version() AS version",
        DatabaseBackend::MySql => "SELECT VERSION() AS version",
        DatabaseBackend::Sqlite => "SELECT 'SQLite ' || sqlite_version() AS version",
    };

    let result = db.query_one(Statement::from_string(backend, sql.to_owned())).await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Create the employee and holiday tables when they are missing.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut employees = schema.create_table_from_entity(Employees);
    employees.if_not_exists();
    db.execute(backend.build(&employees)).await?;

    let mut holidays = schema.create_table_from_entity(Holidays);
    holidays.if_not_exists();
    db.execute(backend.build(&holidays)).await?;

    tracing::debug!("Schema ready on {:?}", backend);
    Ok(())
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    let employees = super::employee::count_all(db).await?;
    let holidays = super::holiday::count_all(db).await?;

    Ok(TableCounts { employees, holidays })
}

/// Table record counts.
#[derive(Debug, Clone)]
pub struct TableCounts {
    pub employees: u64,
    pub holidays: u64,
}

/// In-memory SQLite database with the schema applied.
#[cfg(test)]
pub(crate) async fn connect_memory() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    ensure_schema(&db).await.unwrap();
    db
}
