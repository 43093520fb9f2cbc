use axum::{extract::State, http::StatusCode, Json};
use db::models::JobInput;
use db::repository::{employees as emp_repo, jobs as job_repo};

use super::AppState;
use crate::{
    extract::{EntityId, Fields},
    models::{JobBody, JobDetail},
    ApiError,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobBody>>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let jobs = job_repo::list_jobs(&mut conn).await?;
    Ok(Json(jobs.into_iter().map(JobBody::from).collect()))
}

pub async fn get(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<JobDetail>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let job = job_repo::get_job(&mut conn, id).await?;
    let employees = emp_repo::list_employees_for_job(&mut conn, id).await?;
    Ok(Json(JobDetail::new(job, employees)))
}

pub async fn create(
    State(state): State<AppState>,
    Fields(input): Fields<JobInput>,
) -> Result<(StatusCode, Json<JobBody>), ApiError> {
    let mut conn = state.pool.acquire().await?;
    let job = job_repo::create_job(&mut conn, &input).await?;
    Ok((StatusCode::CREATED, Json(job.into())))
}

pub async fn update(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    Fields(input): Fields<JobInput>,
) -> Result<Json<JobBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let job = job_repo::update_job(&mut conn, id, &input).await?;
    Ok(Json(job.into()))
}

pub async fn delete(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<JobBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let job = job_repo::delete_job(&mut conn, id).await?;
    Ok(Json(job.into()))
}
