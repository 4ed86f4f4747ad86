//! Database pool construction and schema bootstrap.
//!
//! The schema is created at startup if it does not already exist. Tasks carry
//! two foreign keys into `users`: the assignee (who controls the task) and the
//! creator (who has no special rights after creation).

use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn connect(database_url: &str) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(AppError::from)
}

pub async fn init_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id SERIAL PRIMARY KEY,
            task TEXT NOT NULL,
            assignee_id INTEGER NOT NULL REFERENCES users(id),
            creator_id INTEGER NOT NULL REFERENCES users(id),
            status TEXT NOT NULL,
            priority TEXT,
            due_date TIMESTAMPTZ
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
