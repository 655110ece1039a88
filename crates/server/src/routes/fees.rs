use crate::dtos::fee::{
    CreateFeeStructureRequest, FeeQueryParams, FeeStructureResponse, UpdateFeeStructureRequest,
};
use crate::dtos::student::DeleteParams;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::fee::{FeeService, FeeStructureUpdate, NewFeeStructure};

/// List fee structures, optionally scoped to one class
#[utoipa::path(
    get,
    path = "/fees",
    params(FeeQueryParams),
    responses(
        (status = 200, description = "Fee structures retrieved successfully", body = Vec<FeeStructureResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Fees"
)]
pub async fn get_fees(
    State(state): State<AppState>,
    Query(params): Query<FeeQueryParams>,
) -> Result<Json<Vec<FeeStructureResponse>>, ApiError> {
    let fees = FeeService::list(&state.db, params.class_id).await?;
    Ok(Json(fees.into_iter().map(FeeStructureResponse::from).collect()))
}

/// Add a fee structure for a class
#[utoipa::path(
    post,
    path = "/fees",
    request_body = CreateFeeStructureRequest,
    responses(
        (status = 201, description = "Fee structure created", body = FeeStructureResponse),
        (status = 400, description = "Negative amount"),
        (status = 404, description = "Class not found"),
        (status = 409, description = "A fee with this name already exists for the class"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Fees"
)]
pub async fn create_fee(
    State(state): State<AppState>,
    Json(body): Json<CreateFeeStructureRequest>,
) -> Result<(StatusCode, Json<FeeStructureResponse>), ApiError> {
    let fee = FeeService::create(
        &state.db,
        NewFeeStructure {
            class_id: body.class_id,
            name: body.name,
            amount: body.amount,
            due_date: body.due_date,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(FeeStructureResponse::from(fee))))
}

/// Update a fee structure
#[utoipa::path(
    put,
    path = "/fees",
    request_body = UpdateFeeStructureRequest,
    responses(
        (status = 200, description = "Fee structure updated", body = FeeStructureResponse),
        (status = 400, description = "Negative amount"),
        (status = 404, description = "Fee structure not found"),
        (status = 409, description = "A fee with this name already exists for the class"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Fees"
)]
pub async fn update_fee(
    State(state): State<AppState>,
    Json(body): Json<UpdateFeeStructureRequest>,
) -> Result<Json<FeeStructureResponse>, ApiError> {
    let fee = FeeService::update(
        &state.db,
        body.id,
        FeeStructureUpdate {
            name: body.name,
            amount: body.amount,
            due_date: body.due_date,
        },
    )
    .await?;

    Ok(Json(FeeStructureResponse::from(fee)))
}

/// Remove a fee structure
#[utoipa::path(
    delete,
    path = "/fees",
    params(DeleteParams),
    responses(
        (status = 200, description = "Fee structure deleted"),
        (status = 404, description = "Fee structure not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Fees"
)]
pub async fn delete_fee(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    FeeService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
