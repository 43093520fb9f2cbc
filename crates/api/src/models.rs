//! JSON response records.
//!
//! Built explicitly from `db` rows so the wire format stays independent of
//! column naming.

use serde::Serialize;

use db::models::{Employee, Job, JobHistory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobBody {
    #[serde(rename = "JobID")]
    pub job_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl From<Job> for JobBody {
    fn from(row: Job) -> Self {
        Self {
            job_id: row.job_id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Lightweight entry listed under a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A job together with the employees that reference it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: JobBody,
    #[serde(rename = "Employees")]
    pub employees: Vec<EmployeeSummary>,
}

impl JobDetail {
    pub fn new(job: Job, employees: Vec<Employee>) -> Self {
        Self {
            job: job.into(),
            employees: employees
                .into_iter()
                .map(|e| EmployeeSummary {
                    employee_id: e.employee_id,
                    name: e.name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeBody {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i32,
    #[serde(rename = "E_JobID")]
    pub e_job_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Birthday")]
    pub birthday: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Department")]
    pub department: String,
}

impl From<Employee> for EmployeeBody {
    fn from(row: Employee) -> Self {
        Self {
            employee_id: row.employee_id,
            e_job_id: row.e_job_id,
            name: row.name,
            birthday: row.birthday,
            salary: row.salary,
            department: row.department,
        }
    }
}

/// Lightweight entry listed under an employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobHistorySummary {
    #[serde(rename = "JobHistoryID")]
    pub job_history_id: i32,
    #[serde(rename = "Title")]
    pub title: String,
}

/// An employee together with their job history entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: EmployeeBody,
    #[serde(rename = "JobHistories")]
    pub job_histories: Vec<JobHistorySummary>,
}

impl EmployeeDetail {
    pub fn new(employee: Employee, history: Vec<JobHistory>) -> Self {
        Self {
            employee: employee.into(),
            job_histories: history
                .into_iter()
                .map(|h| JobHistorySummary {
                    job_history_id: h.job_history_id,
                    title: h.title,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobHistoryBody {
    #[serde(rename = "JobHistoryID")]
    pub job_history_id: i32,
    #[serde(rename = "E_EmployeeID")]
    pub e_employee_id: i32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StartDate")]
    pub start_date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Job")]
    pub job: String,
}

impl From<JobHistory> for JobHistoryBody {
    fn from(row: JobHistory) -> Self {
        Self {
            job_history_id: row.job_history_id,
            e_employee_id: row.e_employee_id,
            title: row.title,
            start_date: row.start_date,
            end_date: row.end_date,
            salary: row.salary,
            job: row.job,
        }
    }
}
