use crate::dtos::content::{
    AnnouncementResponse, CreateAnnouncementRequest, ReorderItem, ReorderResponse,
    UpdateAnnouncementRequest,
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
use database::services::content::{AnnouncementService, AnnouncementUpdate, NewAnnouncement};
use serde_json::Value;

/// List announcements in display order
#[utoipa::path(
    get,
    path = "/announcements",
    responses(
        (status = 200, description = "Announcements retrieved successfully", body = Vec<AnnouncementResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn get_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, ApiError> {
    let rows = AnnouncementService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(AnnouncementResponse::from).collect()))
}

/// Publish an announcement, appended at the end of the display order
#[utoipa::path(
    post,
    path = "/announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(body): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), ApiError> {
    let row = AnnouncementService::create(
        &state.db,
        NewAnnouncement {
            title: body.title,
            body: body.body,
            audience: body.audience,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(AnnouncementResponse::from(row))))
}

/// Update one announcement, or bulk-reorder the whole collection.
///
/// An array body is treated as a reorder payload; an object body updates a
/// single row.
#[utoipa::path(
    put,
    path = "/announcements",
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementResponse),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "Announcement not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn update_announcements(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match body {
        Value::Array(items) => {
            let entries: Vec<ReorderItem> = serde_json::from_value(Value::Array(items))
                .map_err(|err| ApiError::Validation(format!("invalid reorder entry: {err}")))?;
            let updated = AnnouncementService::reorder(
                &state.db,
                entries.into_iter().map(Into::into).collect(),
            )
            .await?;
            Ok(Json(ReorderResponse { updated }).into_response())
        }
        value => {
            let body: UpdateAnnouncementRequest = serde_json::from_value(value)
                .map_err(|err| ApiError::Validation(format!("invalid announcement update: {err}")))?;
            let row = AnnouncementService::update(
                &state.db,
                body.id,
                AnnouncementUpdate {
                    title: body.title,
                    body: body.body,
                    audience: body.audience,
                },
            )
            .await?;
            Ok(Json(AnnouncementResponse::from(row)).into_response())
        }
    }
}

/// Remove an announcement
#[utoipa::path(
    delete,
    path = "/announcements",
    params(DeleteParams),
    responses(
        (status = 200, description = "Announcement deleted"),
        (status = 404, description = "Announcement not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    AnnouncementService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
