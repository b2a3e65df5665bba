use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppResult,
    insurance::{
        dto::{CreateInsuranceRequest, UpdateInsuranceRequest},
        repo_types::Insurance,
        services,
    },
    state::AppState,
};

pub fn insurance_routes() -> Router<AppState> {
    Router::new()
        .route("/insurance", post(create_insurance))
        .route("/insurance/:id", get(get_insurance).put(update_insurance))
}

#[instrument(skip(state, payload))]
pub async fn create_insurance(
    State(state): State<AppState>,
    Json(payload): Json<CreateInsuranceRequest>,
) -> AppResult<(StatusCode, Json<Insurance>)> {
    let insurance = services::create_insurance(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(insurance)))
}

/// Responds `200 null` for an unknown id.
#[instrument(skip(state))]
pub async fn get_insurance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Option<Insurance>>> {
    Ok(Json(services::get_insurance(&state.db, id).await?))
}

#[instrument(skip(state, payload))]
pub async fn update_insurance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInsuranceRequest>,
) -> AppResult<Json<Option<Insurance>>> {
    Ok(Json(services::update_insurance(&state.db, id, &payload).await?))
}
