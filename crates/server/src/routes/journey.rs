use crate::dtos::content::{
    CreateJourneyEntryRequest, JourneyEntryResponse, ReorderItem, ReorderResponse,
    UpdateJourneyEntryRequest,
};
use crate::dtos::student::DeleteParams;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::services::content::{JourneyEntryUpdate, JourneyService, NewJourneyEntry};
use serde_json::Value;

/// List journey milestones in display order
#[utoipa::path(
    get,
    path = "/journey",
    responses(
        (status = 200, description = "Journey entries retrieved successfully", body = Vec<JourneyEntryResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn get_journey(
    State(state): State<AppState>,
) -> Result<Json<Vec<JourneyEntryResponse>>, ApiError> {
    let rows = JourneyService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(JourneyEntryResponse::from).collect()))
}

/// Add a journey milestone, appended at the end of the display order
#[utoipa::path(
    post,
    path = "/journey",
    request_body = CreateJourneyEntryRequest,
    responses(
        (status = 201, description = "Journey entry created", body = JourneyEntryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn create_journey_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateJourneyEntryRequest>,
) -> Result<(StatusCode, Json<JourneyEntryResponse>), ApiError> {
    let row = JourneyService::create(
        &state.db,
        NewJourneyEntry {
            year: body.year,
            title: body.title,
            description: body.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(JourneyEntryResponse::from(row))))
}

/// Update one journey milestone, or bulk-reorder the whole collection
#[utoipa::path(
    put,
    path = "/journey",
    request_body = UpdateJourneyEntryRequest,
    responses(
        (status = 200, description = "Journey entry updated", body = JourneyEntryResponse),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "Journey entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn update_journey(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match body {
        Value::Array(items) => {
            let entries: Vec<ReorderItem> = serde_json::from_value(Value::Array(items))
                .map_err(|err| ApiError::Validation(format!("invalid reorder entry: {err}")))?;
            let updated =
                JourneyService::reorder(&state.db, entries.into_iter().map(Into::into).collect())
                    .await?;
            Ok(Json(ReorderResponse { updated }).into_response())
        }
        value => {
            let body: UpdateJourneyEntryRequest = serde_json::from_value(value)
                .map_err(|err| ApiError::Validation(format!("invalid journey update: {err}")))?;
            let row = JourneyService::update(
                &state.db,
                body.id,
                JourneyEntryUpdate {
                    year: body.year,
                    title: body.title,
                    description: body.description,
                },
            )
            .await?;
            Ok(Json(JourneyEntryResponse::from(row)).into_response())
        }
    }
}

/// Remove a journey milestone
#[utoipa::path(
    delete,
    path = "/journey",
    params(DeleteParams),
    responses(
        (status = 200, description = "Journey entry deleted"),
        (status = 404, description = "Journey entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn delete_journey_entry(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    JourneyService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
