//! Employee CRUD operations and the job → employees child listing.

use sqlx::PgConnection;
use tracing::debug;

use crate::{
    DbError,
    models::{Employee, EmployeeInput},
};

const ENTITY: &str = "Employee";

/// Return all employees ordered by primary key.
pub async fn list_employees(conn: &mut PgConnection) -> Result<Vec<Employee>, DbError> {
    let rows = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, e_job_id, name, birthday, salary, department
        FROM employees
        ORDER BY employee_id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Return the employees whose `e_job_id` equals `job_id`.
///
/// Does not check that the job itself exists.
pub async fn list_employees_for_job(
    conn: &mut PgConnection,
    job_id: i32,
) -> Result<Vec<Employee>, DbError> {
    let rows = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, e_job_id, name, birthday, salary, department
        FROM employees
        WHERE e_job_id = $1
        ORDER BY employee_id
        "#,
    )
    .bind(job_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Fetch a single employee by its primary key.
pub async fn get_employee(conn: &mut PgConnection, id: i32) -> Result<Employee, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, e_job_id, name, birthday, salary, department
        FROM employees
        WHERE employee_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    Ok(row)
}

/// Insert a new employee and return it with its generated `employee_id`.
pub async fn create_employee(
    conn: &mut PgConnection,
    input: &EmployeeInput,
) -> Result<Employee, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (e_job_id, name, birthday, salary, department)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING employee_id, e_job_id, name, birthday, salary, department
        "#,
    )
    .bind(input.e_job_id)
    .bind(&input.name)
    .bind(&input.birthday)
    .bind(input.salary)
    .bind(&input.department)
    .fetch_one(&mut *conn)
    .await?;

    debug!(employee_id = row.employee_id, e_job_id = row.e_job_id, "employee created");
    Ok(row)
}

/// Overwrite every column of an existing employee.
pub async fn update_employee(
    conn: &mut PgConnection,
    id: i32,
    input: &EmployeeInput,
) -> Result<Employee, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employees
        SET e_job_id = $1, name = $2, birthday = $3, salary = $4, department = $5
        WHERE employee_id = $6
        RETURNING employee_id, e_job_id, name, birthday, salary, department
        "#,
    )
    .bind(input.e_job_id)
    .bind(&input.name)
    .bind(&input.birthday)
    .bind(input.salary)
    .bind(&input.department)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(employee_id = id, "employee updated");
    Ok(row)
}

/// Permanently delete an employee, returning the row as it was before removal.
pub async fn delete_employee(conn: &mut PgConnection, id: i32) -> Result<Employee, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        DELETE FROM employees
        WHERE employee_id = $1
        RETURNING employee_id, e_job_id, name, birthday, salary, department
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(ENTITY))?;

    debug!(employee_id = id, "employee deleted");
    Ok(row)
}
