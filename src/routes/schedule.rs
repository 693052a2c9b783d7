use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::schedule_dto::{
        ScheduleListResponse, ScheduleSessionPayload, SessionCreatedResponse,
        UpdateReadinessPayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = ScheduleSessionPayload,
    responses(
        (status = 201, description = "Session scheduled", body = SessionCreatedResponse),
        (status = 400, description = "Invalid payload, wrong weekday, or malformed date/time"),
        (status = 422, description = "Unknown test type, room, or staff member")
    )
)]
#[axum::debug_handler]
pub async fn schedule_session(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleSessionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let id = state.schedule_service.schedule(payload).await?;
    Ok((StatusCode::CREATED, Json(SessionCreatedResponse { id })))
}

#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "Friday/Saturday sessions grouped by day", body = ScheduleListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_sessions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let days = state.schedule_service.list_grouped().await?;
    Ok(Json(ScheduleListResponse { days }))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = i64, Path, description = "Scheduled test ID")
    ),
    responses(
        (status = 204, description = "Session and its assignments deleted"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.schedule_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/sessions/{id}/readiness",
    params(
        ("id" = i64, Path, description = "Scheduled test ID")
    ),
    request_body = UpdateReadinessPayload,
    responses(
        (status = 204, description = "Readiness check progressed"),
        (status = 400, description = "Check is not pending or target state is invalid"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_readiness(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReadinessPayload>,
) -> Result<impl IntoResponse> {
    state.schedule_service.update_readiness(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}
