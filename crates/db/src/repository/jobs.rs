//! Job CRUD operations.

use sqlx::PgConnection;
use tracing::debug;

use crate::{
    DbError,
    models::{Job, JobInput},
};

const ENTITY: &str = "Job";

/// Return all jobs ordered by primary key.
pub async fn list_jobs(conn: &mut PgConnection) -> Result<Vec<Job>, DbError> {
    let rows = sqlx::query_as::<_, Job>(
        r#"SELECT job_id, name, description FROM jobs ORDER BY job_id"#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Fetch a single job by its primary key.
pub async fn get_job(conn: &mut PgConnection, id: i32) -> Result<Job, DbError> {
    let row = sqlx::query_as::<_, Job>(
        r#"SELECT job_id, name, description FROM jobs WHERE job_id = $1"#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    Ok(row)
}

/// Insert a new job and return it with its generated `job_id`.
pub async fn create_job(conn: &mut PgConnection, input: &JobInput) -> Result<Job, DbError> {
    let row = sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (name, description)
        VALUES ($1, $2)
        RETURNING job_id, name, description
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .fetch_one(&mut *conn)
    .await?;

    debug!(job_id = row.job_id, "job created");
    Ok(row)
}

/// Overwrite every column of an existing job.
///
/// Returns `DbError::NotFound` if no row matched; nothing is written then.
pub async fn update_job(
    conn: &mut PgConnection,
    id: i32,
    input: &JobInput,
) -> Result<Job, DbError> {
    let row = sqlx::query_as::<_, Job>(
        r#"
        UPDATE jobs
        SET name = $1, description = $2
        WHERE job_id = $3
        RETURNING job_id, name, description
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(job_id = id, "job updated");
    Ok(row)
}

/// Permanently delete a job, returning the row as it was before removal.
///
/// Employees pointing at the job are left untouched.
pub async fn delete_job(conn: &mut PgConnection, id: i32) -> Result<Job, DbError> {
    let row = sqlx::query_as::<_, Job>(
        r#"DELETE FROM jobs WHERE job_id = $1 RETURNING job_id, name, description"#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(job_id = id, "job deleted");
    Ok(row)
}
