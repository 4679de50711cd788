// src/common/migrations.rs
//! Database schema management and first-run seeding

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::password::hash_password;
use crate::storage::Store;

/// Create the schema. With `reset` every table is dropped first.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("⚠️  RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("✅ Dropped old tables");
    } else {
        info!("ℹ️  Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_account_tables(pool).await?;
    create_skill_tables(pool).await?;
    create_indexes(pool).await?;

    info!("✅ Database migration completed successfully!");
    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["skills", "candidates", "hr_users"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn create_account_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hr_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            resume_path TEXT,
            skill_score REAL,
            rank INTEGER,
            status TEXT NOT NULL DEFAULT 'Under Review'
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_skill_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // skill_name is not UNIQUE; duplicate rows each contribute to a score
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            skill_name TEXT NOT NULL,
            weight REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_candidates_status ON candidates(status)",
        "CREATE INDEX IF NOT EXISTS idx_candidates_rank ON candidates(rank)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed the default HR account unless one with that username already exists
pub async fn seed_default_hr_account(
    store: &dyn Store,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    if store.find_hr_account(username).await?.is_some() {
        info!(username = %username, "HR account already present, skipping seed");
        return Ok(());
    }

    let hash = hash_password(password).await?;
    if store.ensure_hr_account(username, &hash).await? {
        info!(username = %username, "Seeded default HR account");
    }
    Ok(())
}

/// Single-connection in-memory pool with the schema applied
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool, false).await.unwrap();
    pool
}
