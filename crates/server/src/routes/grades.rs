use crate::dtos::grade::{
    CreateGradeRequest, GradeQueryParams, GradeResponse, GradeSummaryParams, GradeSummaryResponse,
    SeedReportResponse, UpdateGradeRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::grade::{GradeService, GradeUpdate, NewGrade};
use serde_json::{Value, json};

/// List submissions, optionally scoped to one student
#[utoipa::path(
    get,
    path = "/grades",
    params(GradeQueryParams),
    responses(
        (status = 200, description = "Submissions retrieved successfully", body = Vec<GradeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn get_grades(
    State(state): State<AppState>,
    Query(params): Query<GradeQueryParams>,
) -> Result<Json<Vec<GradeResponse>>, ApiError> {
    let grades = GradeService::list(&state.db, params.student_id).await?;
    Ok(Json(grades.into_iter().map(GradeResponse::from).collect()))
}

/// Record a submission for an assignment
#[utoipa::path(
    post,
    path = "/grades",
    request_body = CreateGradeRequest,
    responses(
        (status = 201, description = "Submission recorded", body = GradeResponse),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Student already has a submission for this assignment"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn create_grade(
    State(state): State<AppState>,
    Json(body): Json<CreateGradeRequest>,
) -> Result<(StatusCode, Json<GradeResponse>), ApiError> {
    let grade = GradeService::create(
        &state.db,
        NewGrade {
            student_id: body.student_id,
            assignment_id: body.assignment_id,
            marks: body.marks,
            status: body.status,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(GradeResponse::from(grade))))
}

/// Update a submission's marks or status
#[utoipa::path(
    put,
    path = "/grades",
    request_body = UpdateGradeRequest,
    responses(
        (status = 200, description = "Submission updated", body = GradeResponse),
        (status = 404, description = "Submission not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn update_grade(
    State(state): State<AppState>,
    Json(body): Json<UpdateGradeRequest>,
) -> Result<Json<GradeResponse>, ApiError> {
    let grade = GradeService::update(
        &state.db,
        body.id,
        GradeUpdate {
            marks: body.marks,
            status: body.status,
        },
    )
    .await?;

    Ok(Json(GradeResponse::from(grade)))
}

/// Overall percentage and GPA for one student
#[utoipa::path(
    get,
    path = "/grades/summary",
    params(GradeSummaryParams),
    responses(
        (status = 200, description = "Summary computed", body = GradeSummaryResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn get_grade_summary(
    State(state): State<AppState>,
    Query(params): Query<GradeSummaryParams>,
) -> Result<Json<GradeSummaryResponse>, ApiError> {
    let summary = GradeService::summary(&state.db, params.student_id).await?;
    Ok(Json(GradeSummaryResponse::from(summary)))
}

/// Populate sample submissions across every assignment
#[utoipa::path(
    post,
    path = "/grades/seed",
    responses(
        (status = 201, description = "Sample data generated", body = SeedReportResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn seed_grades(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SeedReportResponse>), ApiError> {
    let report = GradeService::seed(&state.db).await?;
    Ok((StatusCode::CREATED, Json(SeedReportResponse::from(report))))
}

/// Delete every submission
#[utoipa::path(
    delete,
    path = "/grades/seed",
    responses(
        (status = 200, description = "Submissions cleared"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn clear_grades(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let deleted = GradeService::clear_all(&state.db).await?;
    Ok(Json(json!({ "deleted": deleted })))
}
