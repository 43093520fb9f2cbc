use axum::{extract::State, http::StatusCode, Json};
use db::models::JobHistoryInput;
use db::repository::job_history as history_repo;

use super::AppState;
use crate::{
    extract::{EntityId, Fields},
    models::JobHistoryBody,
    ApiError,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobHistoryBody>>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let history = history_repo::list_job_history(&mut conn).await?;
    Ok(Json(history.into_iter().map(JobHistoryBody::from).collect()))
}

pub async fn get(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<JobHistoryBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let entry = history_repo::get_job_history(&mut conn, id).await?;
    Ok(Json(entry.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Fields(input): Fields<JobHistoryInput>,
) -> Result<(StatusCode, Json<JobHistoryBody>), ApiError> {
    let mut conn = state.pool.acquire().await?;
    let entry = history_repo::create_job_history(&mut conn, &input).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn update(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    Fields(input): Fields<JobHistoryInput>,
) -> Result<Json<JobHistoryBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let entry = history_repo::update_job_history(&mut conn, id, &input).await?;
    Ok(Json(entry.into()))
}

pub async fn delete(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<JobHistoryBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let entry = history_repo::delete_job_history(&mut conn, id).await?;
    Ok(Json(entry.into()))
}
