//! Row structs that map 1-to-1 onto database tables, plus the field sets
//! accepted when creating or overwriting a row.
//!
//! These are *persistence* models.  The JSON shapes served over HTTP live
//! in the `api` crate.

use serde::{de, Deserialize, Deserializer};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

/// A persisted job row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Job {
    pub job_id: i32,
    pub name: String,
    pub description: String,
}

/// Every writable column of `jobs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobInput {
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// employees
// ---------------------------------------------------------------------------

/// A persisted employee row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Employee {
    pub employee_id: i32,
    /// References `jobs.job_id`; not enforced by the store.
    pub e_job_id: i32,
    pub name: String,
    /// Stored as text exactly as supplied.
    pub birthday: String,
    pub salary: f64,
    pub department: String,
}

/// Every writable column of `employees`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeInput {
    pub e_job_id: i32,
    pub name: String,
    pub birthday: String,
    #[serde(deserialize_with = "finite_salary")]
    pub salary: f64,
    pub department: String,
}

// ---------------------------------------------------------------------------
// job_history
// ---------------------------------------------------------------------------

/// A persisted job history row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct JobHistory {
    pub job_history_id: i32,
    /// References `employees.employee_id`; not enforced by the store.
    pub e_employee_id: i32,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub salary: f64,
    /// Free-text label, not a reference to `jobs`.
    pub job: String,
}

/// Every writable column of `job_history`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobHistoryInput {
    pub e_employee_id: i32,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "finite_salary")]
    pub salary: f64,
    pub job: String,
}

/// Rejects `NaN` and infinities, which serialize back as JSON `null`.
fn finite_salary<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let salary = f64::deserialize(deserializer)?;
    if salary.is_finite() {
        Ok(salary)
    } else {
        Err(de::Error::custom("salary must be a finite number"))
    }
}
