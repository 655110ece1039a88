use crate::dtos::student::DeleteParams;
use crate::dtos::timetable::{
    CreateTimetableSlotRequest, TimetableQueryParams, TimetableSlotResponse,
    UpdateTimetableSlotRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::timetable::{NewTimetableSlot, TimetableService, TimetableSlotUpdate};

/// List timetable slots, optionally scoped to one class
#[utoipa::path(
    get,
    path = "/timetable",
    params(TimetableQueryParams),
    responses(
        (status = 200, description = "Timetable retrieved successfully", body = Vec<TimetableSlotResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timetable"
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    Query(params): Query<TimetableQueryParams>,
) -> Result<Json<Vec<TimetableSlotResponse>>, ApiError> {
    let slots = TimetableService::list(&state.db, params.class_id).await?;
    Ok(Json(slots.into_iter().map(TimetableSlotResponse::from).collect()))
}

/// Add a day's schedule for a class
#[utoipa::path(
    post,
    path = "/timetable",
    request_body = CreateTimetableSlotRequest,
    responses(
        (status = 201, description = "Timetable slot created", body = TimetableSlotResponse),
        (status = 400, description = "Unknown day of week"),
        (status = 404, description = "Class not found"),
        (status = 409, description = "Class already has a timetable for this day"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timetable"
)]
pub async fn create_timetable_slot(
    State(state): State<AppState>,
    Json(body): Json<CreateTimetableSlotRequest>,
) -> Result<(StatusCode, Json<TimetableSlotResponse>), ApiError> {
    let slot = TimetableService::create(
        &state.db,
        NewTimetableSlot {
            class_id: body.class_id,
            day_of_week: body.day_of_week,
            periods: body.periods,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(TimetableSlotResponse::from(slot))))
}

/// Update a timetable slot's day or periods
#[utoipa::path(
    put,
    path = "/timetable",
    request_body = UpdateTimetableSlotRequest,
    responses(
        (status = 200, description = "Timetable slot updated", body = TimetableSlotResponse),
        (status = 400, description = "Unknown day of week"),
        (status = 404, description = "Timetable slot not found"),
        (status = 409, description = "Class already has a timetable for this day"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timetable"
)]
pub async fn update_timetable_slot(
    State(state): State<AppState>,
    Json(body): Json<UpdateTimetableSlotRequest>,
) -> Result<Json<TimetableSlotResponse>, ApiError> {
    let slot = TimetableService::update(
        &state.db,
        body.id,
        TimetableSlotUpdate {
            day_of_week: body.day_of_week,
            periods: body.periods,
        },
    )
    .await?;

    Ok(Json(TimetableSlotResponse::from(slot)))
}

/// Remove a timetable slot
#[utoipa::path(
    delete,
    path = "/timetable",
    params(DeleteParams),
    responses(
        (status = 200, description = "Timetable slot deleted"),
        (status = 404, description = "Timetable slot not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timetable"
)]
pub async fn delete_timetable_slot(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    TimetableService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
