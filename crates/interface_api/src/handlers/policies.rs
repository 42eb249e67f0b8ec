//! Policy handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use validator::Validate;

use core_kernel::PolicyId;
use domain_policy::PolicyDto;

use crate::{AppState, error::ApiError};

/// Lists all policies
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyDto>>, ApiError> {
    Ok(Json(state.policies.list_all().await?))
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<Json<PolicyDto>, ApiError> {
    Ok(Json(state.policies.get_by_id(id).await?))
}

/// Creates a policy for an existing client
pub async fn create_policy(
    State(state): State<AppState>,
    Json(request): Json<PolicyDto>,
) -> Result<(StatusCode, Json<PolicyDto>), ApiError> {
    request.validate()?;
    let created = state.policies.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a policy; the owning client is not changed
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
    Json(request): Json<PolicyDto>,
) -> Result<Json<PolicyDto>, ApiError> {
    request.validate()?;
    Ok(Json(state.policies.update(id, request).await?))
}

/// Deletes a policy with its claims
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<StatusCode, ApiError> {
    state.policies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
