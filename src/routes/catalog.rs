use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::catalog_dto::{
        CreateRoomPayload, CreateStaffPayload, CreateTestTypePayload, RoomResponse, StaffResponse,
        TestTypeResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/manage/test-types",
    request_body = CreateTestTypePayload,
    responses(
        (status = 201, description = "Test type created", body = TestTypeResponse),
        (status = 400, description = "Invalid payload or duplicate name")
    )
)]
#[axum::debug_handler]
pub async fn create_test_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateTestTypePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let test_type = state.catalog_service.create_test_type(payload).await?;
    Ok((StatusCode::CREATED, Json(TestTypeResponse::from(test_type))))
}

#[utoipa::path(
    get,
    path = "/api/manage/test-types",
    responses(
        (status = 200, description = "All test types ordered by name", body = [TestTypeResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_test_types(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.catalog_service.list_test_types().await?;
    let responses: Vec<TestTypeResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/manage/rooms",
    request_body = CreateRoomPayload,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Invalid payload or duplicate room")
    )
)]
#[axum::debug_handler]
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let room = state.catalog_service.create_room(payload).await?;
    Ok((StatusCode::CREATED, Json(RoomResponse::from(room))))
}

#[utoipa::path(
    get,
    path = "/api/manage/rooms",
    responses(
        (status = 200, description = "All rooms", body = [RoomResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.catalog_service.list_rooms().await?;
    let responses: Vec<RoomResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/manage/staff",
    request_body = CreateStaffPayload,
    responses(
        (status = 201, description = "Staff member created", body = StaffResponse),
        (status = 400, description = "Invalid payload or unknown role label")
    )
)]
#[axum::debug_handler]
pub async fn create_staff_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateStaffPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let member = state.catalog_service.create_staff_member(payload).await?;
    Ok((StatusCode::CREATED, Json(StaffResponse::from(member))))
}

#[utoipa::path(
    get,
    path = "/api/manage/staff",
    responses(
        (status = 200, description = "All staff members", body = [StaffResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_staff(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.catalog_service.list_staff().await?;
    let responses: Vec<StaffResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}
