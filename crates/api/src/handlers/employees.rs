use axum::{extract::State, http::StatusCode, Json};
use db::models::EmployeeInput;
use db::repository::{employees as emp_repo, job_history as history_repo};

use super::AppState;
use crate::{
    extract::{EntityId, Fields},
    models::{EmployeeBody, EmployeeDetail},
    ApiError,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeBody>>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let employees = emp_repo::list_employees(&mut conn).await?;
    Ok(Json(employees.into_iter().map(EmployeeBody::from).collect()))
}

pub async fn get(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<EmployeeDetail>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let employee = emp_repo::get_employee(&mut conn, id).await?;
    let history = history_repo::list_job_history_for_employee(&mut conn, id).await?;
    Ok(Json(EmployeeDetail::new(employee, history)))
}

pub async fn create(
    State(state): State<AppState>,
    Fields(input): Fields<EmployeeInput>,
) -> Result<(StatusCode, Json<EmployeeBody>), ApiError> {
    let mut conn = state.pool.acquire().await?;
    let employee = emp_repo::create_employee(&mut conn, &input).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

pub async fn update(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    Fields(input): Fields<EmployeeInput>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let employee = emp_repo::update_employee(&mut conn, id, &input).await?;
    Ok(Json(employee.into()))
}

pub async fn delete(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let employee = emp_repo::delete_employee(&mut conn, id).await?;
    Ok(Json(employee.into()))
}
