//! Client handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use validator::Validate;

use core_kernel::ClientId;
use domain_client::ClientDto;

use crate::{AppState, error::ApiError};

/// Lists all clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientDto>>, ApiError> {
    Ok(Json(state.clients.list_all().await?))
}

/// Gets a client by ID
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<ClientDto>, ApiError> {
    Ok(Json(state.clients.get_by_id(id).await?))
}

/// Creates a client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<ClientDto>,
) -> Result<(StatusCode, Json<ClientDto>), ApiError> {
    request.validate()?;
    let created = state.clients.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a client
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Json(request): Json<ClientDto>,
) -> Result<Json<ClientDto>, ApiError> {
    request.validate()?;
    Ok(Json(state.clients.update(id, request).await?))
}

/// Deletes a client with its policies and claims
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
