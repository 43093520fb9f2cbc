//! Job history CRUD operations and the employee → history child listing.

use sqlx::PgConnection;
use tracing::debug;

use crate::{
    DbError,
    models::{JobHistory, JobHistoryInput},
};

const ENTITY: &str = "Job history";

/// Return all job history entries ordered by primary key.
pub async fn list_job_history(conn: &mut PgConnection) -> Result<Vec<JobHistory>, DbError> {
    let rows = sqlx::query_as::<_, JobHistory>(
        r#"
        SELECT job_history_id, e_employee_id, title, start_date, end_date, salary, job
        FROM job_history
        ORDER BY job_history_id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Return the history entries whose `e_employee_id` equals `employee_id`.
pub async fn list_job_history_for_employee(
    conn: &mut PgConnection,
    employee_id: i32,
) -> Result<Vec<JobHistory>, DbError> {
    let rows = sqlx::query_as::<_, JobHistory>(
        r#"
        SELECT job_history_id, e_employee_id, title, start_date, end_date, salary, job
        FROM job_history
        WHERE e_employee_id = $1
        ORDER BY job_history_id
        "#,
    )
    .bind(employee_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Fetch a single job history entry by its primary key.
pub async fn get_job_history(conn: &mut PgConnection, id: i32) -> Result<JobHistory, DbError> {
    let row = sqlx::query_as::<_, JobHistory>(
        r#"
        SELECT job_history_id, e_employee_id, title, start_date, end_date, salary, job
        FROM job_history
        WHERE job_history_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    Ok(row)
}

/// Insert a new entry and return it with its generated `job_history_id`.
pub async fn create_job_history(
    conn: &mut PgConnection,
    input: &JobHistoryInput,
) -> Result<JobHistory, DbError> {
    let row = sqlx::query_as::<_, JobHistory>(
        r#"
        INSERT INTO job_history (e_employee_id, title, start_date, end_date, salary, job)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING job_history_id, e_employee_id, title, start_date, end_date, salary, job
        "#,
    )
    .bind(input.e_employee_id)
    .bind(&input.title)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.salary)
    .bind(&input.job)
    .fetch_one(&mut *conn)
    .await?;

    debug!(job_history_id = row.job_history_id, "job history created");
    Ok(row)
}

/// Overwrite every column of an existing entry.
pub async fn update_job_history(
    conn: &mut PgConnection,
    id: i32,
    input: &JobHistoryInput,
) -> Result<JobHistory, DbError> {
    let row = sqlx::query_as::<_, JobHistory>(
        r#"
        UPDATE job_history
        SET e_employee_id = $1, title = $2, start_date = $3, end_date = $4, salary = $5, job = $6
        WHERE job_history_id = $7
        RETURNING job_history_id, e_employee_id, title, start_date, end_date, salary, job
        "#,
    )
    .bind(input.e_employee_id)
    .bind(&input.title)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.salary)
    .bind(&input.job)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(job_history_id = id, "job history updated");
    Ok(row)
}

/// Permanently delete an entry, returning the row as it was before removal.
pub async fn delete_job_history(conn: &mut PgConnection, id: i32) -> Result<JobHistory, DbError> {
    let row = sqlx::query_as::<_, JobHistory>(
        r#"
        DELETE FROM job_history
        WHERE job_history_id = $1
        RETURNING job_history_id, e_employee_id, title, start_date, end_date, salary, job
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(job_history_id = id, "job history deleted");
    Ok(row)
}
