//! Database connection and pool management
//!
//! A single SQLite pool owned by the application replaces the original
//! per-screen ad-hoc connections. The file is created on first open and
//! the schema is applied through embedded migrations.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{info, warn};

/// Create a SQLite connection pool backed by a database file
pub async fn create_pool(path: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(path, max_connections, "Database pool created");

    Ok(pool)
}

/// Create an in-memory pool for tests and ephemeral use
///
/// Capped at one connection: each in-memory connection is its own database,
/// so a wider pool would hand out empty databases.
pub async fn memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_pool_is_healthy() {
        let pool = memory_pool().await.unwrap();
        health_check(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_migrations_apply_cleanly() {
        let pool = memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        // All five tables exist after migration
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
             ('users', 'body_measurements', 'workouts', 'teams', 'team_members')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 5);
    }
}
