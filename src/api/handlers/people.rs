//! Handlers for client and employee endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::people::{PersonItem, PersonRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a client.
///
/// # Endpoint
///
/// `POST /client/`
pub async fn create_client_handler(
    State(state): State<AppState>,
    Json(payload): Json<PersonRequest>,
) -> Result<(StatusCode, Json<PersonItem>), AppError> {
    let client = state.client_service.create_client(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Lists every client.
///
/// # Endpoint
///
/// `GET /client/`
pub async fn list_clients_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonItem>>, AppError> {
    let clients = state.client_service.list_clients().await?;
    Ok(Json(clients.into_iter().map(PersonItem::from).collect()))
}

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /employee/`
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<PersonRequest>,
) -> Result<(StatusCode, Json<PersonItem>), AppError> {
    let employee = state.employee_service.create_employee(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Lists every employee.
///
/// # Endpoint
///
/// `GET /employee/`
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonItem>>, AppError> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees.into_iter().map(PersonItem::from).collect()))
}
