use crate::dtos::content::{
    CreateStaffMemberRequest, ReorderItem, ReorderResponse, StaffMemberResponse,
    UpdateStaffMemberRequest,
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
use database::services::content::{NewStaffMember, StaffMemberUpdate, StaffService};
use serde_json::Value;

/// List staff members in display order
#[utoipa::path(
    get,
    path = "/staff",
    responses(
        (status = 200, description = "Staff members retrieved successfully", body = Vec<StaffMemberResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn get_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffMemberResponse>>, ApiError> {
    let rows = StaffService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(StaffMemberResponse::from).collect()))
}

/// Add a staff member, appended at the end of the display order
#[utoipa::path(
    post,
    path = "/staff",
    request_body = CreateStaffMemberRequest,
    responses(
        (status = 201, description = "Staff member created", body = StaffMemberResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn create_staff_member(
    State(state): State<AppState>,
    Json(body): Json<CreateStaffMemberRequest>,
) -> Result<(StatusCode, Json<StaffMemberResponse>), ApiError> {
    let row = StaffService::create(
        &state.db,
        NewStaffMember {
            name: body.name,
            role: body.role,
            photo_url: body.photo_url,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(StaffMemberResponse::from(row))))
}

/// Update one staff member, or bulk-reorder the whole collection
#[utoipa::path(
    put,
    path = "/staff",
    request_body = UpdateStaffMemberRequest,
    responses(
        (status = 200, description = "Staff member updated", body = StaffMemberResponse),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match body {
        Value::Array(items) => {
            let entries: Vec<ReorderItem> = serde_json::from_value(Value::Array(items))
                .map_err(|err| ApiError::Validation(format!("invalid reorder entry: {err}")))?;
            let updated =
                StaffService::reorder(&state.db, entries.into_iter().map(Into::into).collect())
                    .await?;
            Ok(Json(ReorderResponse { updated }).into_response())
        }
        value => {
            let body: UpdateStaffMemberRequest = serde_json::from_value(value)
                .map_err(|err| ApiError::Validation(format!("invalid staff update: {err}")))?;
            let row = StaffService::update(
                &state.db,
                body.id,
                StaffMemberUpdate {
                    name: body.name,
                    role: body.role,
                    photo_url: body.photo_url,
                },
            )
            .await?;
            Ok(Json(StaffMemberResponse::from(row)).into_response())
        }
    }
}

/// Remove a staff member
#[utoipa::path(
    delete,
    path = "/staff",
    params(DeleteParams),
    responses(
        (status = 200, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn delete_staff_member(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    StaffService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
