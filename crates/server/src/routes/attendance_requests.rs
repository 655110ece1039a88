use crate::dtos::attendance::{
    AttendanceRequestQueryParams, AttendanceRequestResponse, CreateAttendanceRequestBody,
    DecideAttendanceRequestBody,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::attendance_request::{AttendanceRequestService, NewAttendanceRequest};

/// List attendance-change requests, optionally filtered by status
#[utoipa::path(
    get,
    path = "/attendance-requests",
    params(AttendanceRequestQueryParams),
    responses(
        (status = 200, description = "Requests retrieved successfully", body = Vec<AttendanceRequestResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance_requests(
    State(state): State<AppState>,
    Query(params): Query<AttendanceRequestQueryParams>,
) -> Result<Json<Vec<AttendanceRequestResponse>>, ApiError> {
    let requests = AttendanceRequestService::list(&state.db, params.status).await?;

    Ok(Json(
        requests
            .into_iter()
            .map(AttendanceRequestResponse::from)
            .collect(),
    ))
}

/// File a request to change one attendance record's status
#[utoipa::path(
    post,
    path = "/attendance-requests",
    request_body = CreateAttendanceRequestBody,
    responses(
        (status = 201, description = "Request filed", body = AttendanceRequestResponse),
        (status = 400, description = "Requested status matches the current one"),
        (status = 404, description = "Attendance record not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn create_attendance_request(
    State(state): State<AppState>,
    Json(body): Json<CreateAttendanceRequestBody>,
) -> Result<(StatusCode, Json<AttendanceRequestResponse>), ApiError> {
    let request = AttendanceRequestService::create(
        &state.db,
        NewAttendanceRequest {
            student_id: body.student_id,
            attendance_id: body.attendance_id,
            requested_status: body.requested_status,
            reason: body.reason,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AttendanceRequestResponse::from(request)),
    ))
}

/// Approve or deny a pending request.
///
/// Approval overwrites the underlying attendance record in the same
/// transaction. A request that has already been decided cannot be decided
/// again.
#[utoipa::path(
    put,
    path = "/attendance-requests",
    request_body = DecideAttendanceRequestBody,
    responses(
        (status = 200, description = "Request decided", body = AttendanceRequestResponse),
        (status = 400, description = "Request already decided or decision invalid"),
        (status = 404, description = "Request not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn decide_attendance_request(
    State(state): State<AppState>,
    Json(body): Json<DecideAttendanceRequestBody>,
) -> Result<Json<AttendanceRequestResponse>, ApiError> {
    let decided = AttendanceRequestService::decide(&state.db, body.id, body.status).await?;
    Ok(Json(AttendanceRequestResponse::from(decided)))
}
