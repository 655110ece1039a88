use crate::dtos::attendance::{AttendanceStatsParams, AttendanceStatsResponse};
use crate::dtos::student::{
    CreateStudentRequest, DeleteParams, StudentQueryParams, StudentResponse, UpdateStudentRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::attendance::AttendanceService;
use database::services::student::{NewStudent, StudentService, StudentUpdate};
use models::attendance;

/// List students, optionally with each one's live attendance percentage.
///
/// The percentage is derived fresh from the month's records on every call,
/// never read from a stored field.
#[utoipa::path(
    get,
    path = "/students",
    params(StudentQueryParams),
    responses(
        (status = 200, description = "Students retrieved successfully", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StudentQueryParams>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    if !params.include_attendance {
        let students = StudentService::list(&state.db, params.class_id).await?;
        return Ok(Json(students.into_iter().map(StudentResponse::from).collect()));
    }

    let (default_year, default_month) = attendance::year_month(chrono::Local::now().date_naive());
    let year = params.year.unwrap_or(default_year);
    let month = params.month.unwrap_or(default_month);

    let students =
        StudentService::list_with_attendance(&state.db, params.class_id, year, month).await?;

    Ok(Json(
        students
            .into_iter()
            .map(|(student, stats)| StudentResponse::new(student, Some(stats)))
            .collect(),
    ))
}

/// Monthly attendance stats for one student, defaulting to the current month
#[utoipa::path(
    get,
    path = "/students/attendance-stats",
    params(AttendanceStatsParams),
    responses(
        (status = 200, description = "Stats computed", body = AttendanceStatsResponse),
        (status = 400, description = "Invalid month"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_attendance_stats(
    State(state): State<AppState>,
    Query(params): Query<AttendanceStatsParams>,
) -> Result<Json<AttendanceStatsResponse>, ApiError> {
    let (default_year, default_month) = attendance::year_month(chrono::Local::now().date_naive());
    let year = params.year.unwrap_or(default_year);
    let month = params.month.unwrap_or(default_month);

    let stats = AttendanceService::monthly_stats(
        &state.db,
        params.student_id,
        params.class_id,
        year,
        month,
    )
    .await?;

    Ok(Json(AttendanceStatsResponse::from(stats)))
}

/// Enroll a student into a class
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 404, description = "Class not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = StudentService::create(
        &state.db,
        NewStudent {
            class_id: body.class_id,
            name: body.name,
            email: body.email,
            roll_number: body.roll_number,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// Update a student's details
#[utoipa::path(
    put,
    path = "/students",
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student or class not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::update(
        &state.db,
        body.id,
        StudentUpdate {
            class_id: body.class_id,
            name: body.name,
            email: body.email,
            roll_number: body.roll_number,
        },
    )
    .await?;

    Ok(Json(StudentResponse::from(student)))
}

/// Remove a student
#[utoipa::path(
    delete,
    path = "/students",
    params(DeleteParams),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    StudentService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
