//! Claims handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::ClaimDto;

use crate::{AppState, error::ApiError};

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimDto>>, ApiError> {
    Ok(Json(state.claims.list_all().await?))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimDto>, ApiError> {
    Ok(Json(state.claims.get_by_id(id).await?))
}

/// Files a claim against an existing policy
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<ClaimDto>,
) -> Result<(StatusCode, Json<ClaimDto>), ApiError> {
    request.validate()?;
    let created = state.claims.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    Json(request): Json<ClaimDto>,
) -> Result<Json<ClaimDto>, ApiError> {
    request.validate()?;
    Ok(Json(state.claims.update(id, request).await?))
}

pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<StatusCode, ApiError> {
    state.claims.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
