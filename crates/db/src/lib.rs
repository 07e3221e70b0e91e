//! Persistence for alert preferences.
//!
//! - [`PgSettingsStore`]: the production [`SettingsStore`] backed by the
//!   `alert_settings` table.
//! - [`InMemorySettingsStore`]: a process-local store for tests and local
//!   runs without a database.
//!
//! [`SettingsStore`]: airwatch_core::store::SettingsStore

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod pg;
pub mod repositories;

pub use memory::InMemorySettingsStore;
pub use pg::PgSettingsStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
