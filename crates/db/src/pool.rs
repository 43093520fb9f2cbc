//! Postgres connection pool and schema bootstrap.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling; `acquire_timeout` bounds how
/// long a request may wait for a free connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, DbError> {
    info!(
        "Connecting to database (max_connections={}, acquire_timeout={:?})",
        max_connections, acquire_timeout
    );
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// DDL applied by [`ensure_schema`], in order.
///
/// Foreign-key columns are plain integers: deleting a parent leaves its
/// children in place.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        job_id      SERIAL PRIMARY KEY,
        name        VARCHAR(255) NOT NULL,
        description VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        employee_id SERIAL PRIMARY KEY,
        e_job_id    INTEGER NOT NULL,
        name        VARCHAR(255) NOT NULL,
        birthday    VARCHAR(255) NOT NULL,
        salary      DOUBLE PRECISION NOT NULL,
        department  VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS job_history (
        job_history_id SERIAL PRIMARY KEY,
        e_employee_id  INTEGER NOT NULL,
        title          VARCHAR(255) NOT NULL,
        start_date     VARCHAR(255) NOT NULL,
        end_date       VARCHAR(255) NOT NULL,
        salary         DOUBLE PRECISION NOT NULL,
        job            VARCHAR(255) NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS employees_e_job_id_idx ON employees (e_job_id)",
    "CREATE INDEX IF NOT EXISTS job_history_e_employee_id_idx ON job_history (e_employee_id)",
];

/// Create the `jobs`, `employees` and `job_history` tables if they are
/// missing.  Safe to call on every start-up.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DbError> {
    info!("Ensuring database schema");
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
