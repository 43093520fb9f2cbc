//! Repository tests against a live Postgres.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p db -- --ignored

use std::time::Duration;

use db::models::{EmployeeInput, JobHistoryInput, JobInput};
use db::repository::{employees, job_history, jobs};
use db::{DbError, DbPool};

async fn setup() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = db::pool::create_pool(&url, 4, Duration::from_secs(5))
        .await
        .expect("pool creation failed");
    db::pool::ensure_schema(&pool).await.expect("schema creation failed");
    pool
}

fn engineer() -> JobInput {
    JobInput {
        name: "Engineer".into(),
        description: "Builds things".into(),
    }
}

fn employee_of(job_id: i32, name: &str) -> EmployeeInput {
    EmployeeInput {
        e_job_id: job_id,
        name: name.into(),
        birthday: "1990-01-01".into(),
        salary: 5000.0,
        department: "Eng".into(),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn ensure_schema_is_idempotent() {
    let pool = setup().await;
    db::pool::ensure_schema(&pool).await.expect("second run failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn created_job_reads_back_unchanged() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let created = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    assert_eq!(created.name, "Engineer");
    assert_eq!(created.description, "Builds things");

    let fetched = jobs::get_job(&mut conn, created.job_id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires database"]
async fn generated_ids_are_unique() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let a = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let b = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    assert_ne!(a.job_id, b.job_id);

    let listed = jobs::list_jobs(&mut conn).await.unwrap();
    assert!(listed.iter().any(|j| j.job_id == a.job_id));
    assert!(listed.iter().any(|j| j.job_id == b.job_id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_replaces_every_field() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let job = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let next = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let emp = employees::create_employee(&mut conn, &employee_of(job.job_id, "Ana"))
        .await
        .unwrap();

    let replacement = EmployeeInput {
        e_job_id: next.job_id,
        name: "Ana Maria".into(),
        birthday: "1991-02-02".into(),
        salary: 6500.5,
        department: "Ops".into(),
    };
    let updated = employees::update_employee(&mut conn, emp.employee_id, &replacement)
        .await
        .unwrap();
    assert_eq!(updated.employee_id, emp.employee_id);

    let fetched = employees::get_employee(&mut conn, emp.employee_id).await.unwrap();
    assert_eq!(fetched.e_job_id, replacement.e_job_id);
    assert_eq!(fetched.name, replacement.name);
    assert_eq!(fetched.birthday, replacement.birthday);
    assert_eq!(fetched.salary, replacement.salary);
    assert_eq!(fetched.department, replacement.department);
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_returns_snapshot_then_not_found() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let job = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let deleted = jobs::delete_job(&mut conn, job.job_id).await.unwrap();
    assert_eq!(deleted, job);

    let err = jobs::get_job(&mut conn, job.job_id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound("Job")));
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_ids_yield_not_found_without_changes() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let input = JobHistoryInput {
        e_employee_id: 1,
        title: "Intern".into(),
        start_date: "2020-01-01".into(),
        end_date: "2020-06-30".into(),
        salary: 1200.0,
        job: "Support".into(),
    };
    let existing = job_history::create_job_history(&mut conn, &input).await.unwrap();

    let replacement = JobHistoryInput {
        title: "Overwritten".into(),
        ..input
    };
    let err = job_history::update_job_history(&mut conn, i32::MAX, &replacement)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Job history not found");

    let err = job_history::delete_job_history(&mut conn, i32::MAX)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));

    let fetched = job_history::get_job_history(&mut conn, existing.job_history_id)
        .await
        .unwrap();
    assert_eq!(fetched, existing);
}

#[tokio::test]
#[ignore = "requires database"]
async fn children_are_filtered_by_foreign_key() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let job = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let other = jobs::create_job(&mut conn, &engineer()).await.unwrap();

    let ana = employees::create_employee(&mut conn, &employee_of(job.job_id, "Ana"))
        .await
        .unwrap();
    let bia = employees::create_employee(&mut conn, &employee_of(job.job_id, "Bia"))
        .await
        .unwrap();
    employees::create_employee(&mut conn, &employee_of(other.job_id, "Caio"))
        .await
        .unwrap();

    let children = employees::list_employees_for_job(&mut conn, job.job_id)
        .await
        .unwrap();
    let ids: Vec<i32> = children.iter().map(|e| e.employee_id).collect();
    assert_eq!(ids, vec![ana.employee_id, bia.employee_id]);
    assert!(children.iter().all(|e| e.e_job_id == job.job_id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_a_job_leaves_its_employees() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let job = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let emp = employees::create_employee(&mut conn, &employee_of(job.job_id, "Ana"))
        .await
        .unwrap();

    jobs::delete_job(&mut conn, job.job_id).await.unwrap();

    let orphan = employees::get_employee(&mut conn, emp.employee_id).await.unwrap();
    assert_eq!(orphan.e_job_id, job.job_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn history_is_listed_under_its_employee() {
    let pool = setup().await;
    let mut conn = pool.acquire().await.unwrap();

    let job = jobs::create_job(&mut conn, &engineer()).await.unwrap();
    let emp = employees::create_employee(&mut conn, &employee_of(job.job_id, "Ana"))
        .await
        .unwrap();
    let entry = job_history::create_job_history(
        &mut conn,
        &JobHistoryInput {
            e_employee_id: emp.employee_id,
            title: "Junior".into(),
            start_date: "2015-01-01".into(),
            end_date: "2017-12-31".into(),
            salary: 3000.0,
            job: "Engineer".into(),
        },
    )
    .await
    .unwrap();

    let history = job_history::list_job_history_for_employee(&mut conn, emp.employee_id)
        .await
        .unwrap();
    assert_eq!(history, vec![entry]);
}
