//! Handlers for the `/api/employee` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use staffdir_core::error::CoreError;
use staffdir_core::types::DbId;
use staffdir_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};

use crate::error::{AppError, AppResult};
use crate::service::EmployeeService;
use crate::state::AppState;

/// POST /api/employee
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = EmployeeService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employee
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeService::list(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employee/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// PUT /api/employee/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeService::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// DELETE /api/employee/{id}
///
/// Always 200, even for an id that does not exist: delete is idempotent
/// and never signals NotFound.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    EmployeeService::delete(&state.pool, id).await?;
    Ok(Json(json!({"message": "Employee deleted successfully!"})))
}
