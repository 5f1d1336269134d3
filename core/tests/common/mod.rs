//! Common test utilities for integration tests

use fittrack_core::db;
use fittrack_core::services::user::UserService;
use sqlx::SqlitePool;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory database with migrations applied
pub async fn test_pool() -> SqlitePool {
    init_tracing();
    let pool = db::memory_pool()
        .await
        .expect("Failed to create in-memory pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Register a user with a standard email and password
pub async fn seed_user(pool: &SqlitePool, username: &str) {
    UserService::register(
        pool,
        username,
        &format!("{username}@example.com"),
        "secret123",
    )
    .await
    .expect("Failed to seed user");
}
