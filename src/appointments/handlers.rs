use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    appointments::{
        dto::{AppointmentResponse, BookAppointmentRequest, RescheduleRequest},
        services,
    },
    error::AppResult,
    state::AppState,
    users::extractors::CurrentUser,
};

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments).post(book_appointment))
        .route(
            "/appointments/:id",
            get(get_appointment)
                .put(reschedule_appointment)
                .delete(cancel_appointment),
        )
}

#[instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> AppResult<Json<Vec<AppointmentResponse>>> {
    let items = services::list_appointments(&state.db, user_id)
        .await?
        .into_iter()
        .map(AppointmentResponse::from)
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn book_appointment(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<BookAppointmentRequest>,
) -> AppResult<(StatusCode, HeaderMap, Json<AppointmentResponse>)> {
    let appointment = services::book_appointment(
        &state.db,
        user_id,
        payload.doctor_id,
        &payload.date,
        &payload.time,
    )
    .await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/appointments/{}", appointment.id))
    {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(appointment.into())))
}

#[instrument(skip(state))]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppointmentResponse>> {
    let appointment = services::get_appointment(&state.db, id).await?;
    Ok(Json(appointment.into()))
}

#[instrument(skip(state, payload))]
pub async fn reschedule_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RescheduleRequest>,
) -> AppResult<Json<AppointmentResponse>> {
    let appointment =
        services::reschedule_appointment(&state.db, id, &payload.date, &payload.time).await?;
    Ok(Json(appointment.into()))
}

#[instrument(skip(state))]
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::cancel_appointment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
