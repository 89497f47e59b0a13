//! Handlers for the `/organizations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uwrap_core::organization::{validate_name, validate_slug};
use uwrap_core::types::DbId;
use uwrap_db::models::organization::{CreateOrganization, Organization};
use uwrap_db::repositories::OrganizationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/organizations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Organization>>> {
    let orgs = OrganizationRepo::list(&state.pool).await?;
    Ok(Json(orgs))
}

/// GET /api/organizations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organization>> {
    let org = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Organization", id))?;
    Ok(Json(org))
}

/// POST /api/organizations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    validate_name(&input.name)?;
    validate_slug(&input.slug)?;

    let org = OrganizationRepo::create(&state.pool, &input).await?;
    tracing::info!(organization_id = org.id, slug = %org.slug, "Organization created");
    Ok((StatusCode::CREATED, Json(org)))
}
