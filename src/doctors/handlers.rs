use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    doctors::{dto::CreateDoctorRequest, repo_types::Doctor, services},
    error::AppResult,
    state::AppState,
};

pub fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route("/doctors/:id", get(get_doctor))
}

#[instrument(skip(state))]
pub async fn list_doctors(State(state): State<AppState>) -> AppResult<Json<Vec<Doctor>>> {
    Ok(Json(services::list_doctors(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Doctor>> {
    Ok(Json(services::get_doctor(&state.db, id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctorRequest>,
) -> AppResult<(StatusCode, Json<Doctor>)> {
    let doctor = services::create_doctor(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(doctor)))
}
