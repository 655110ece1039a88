use crate::dtos::content::{
    CreateFaqRequest, FaqResponse, ReorderItem, ReorderResponse, UpdateFaqRequest,
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
use database::services::content::{FaqService, FaqUpdate, NewFaq};
use serde_json::Value;

/// List FAQ entries in display order
#[utoipa::path(
    get,
    path = "/faq",
    responses(
        (status = 200, description = "FAQ entries retrieved successfully", body = Vec<FaqResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn get_faqs(State(state): State<AppState>) -> Result<Json<Vec<FaqResponse>>, ApiError> {
    let rows = FaqService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(FaqResponse::from).collect()))
}

/// Add an FAQ entry, appended at the end of the display order
#[utoipa::path(
    post,
    path = "/faq",
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "FAQ entry created", body = FaqResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn create_faq(
    State(state): State<AppState>,
    Json(body): Json<CreateFaqRequest>,
) -> Result<(StatusCode, Json<FaqResponse>), ApiError> {
    let row = FaqService::create(
        &state.db,
        NewFaq {
            question: body.question,
            answer: body.answer,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(FaqResponse::from(row))))
}

/// Update one FAQ entry, or bulk-reorder the whole collection
#[utoipa::path(
    put,
    path = "/faq",
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "FAQ entry updated", body = FaqResponse),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "FAQ entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn update_faqs(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match body {
        Value::Array(items) => {
            let entries: Vec<ReorderItem> = serde_json::from_value(Value::Array(items))
                .map_err(|err| ApiError::Validation(format!("invalid reorder entry: {err}")))?;
            let updated =
                FaqService::reorder(&state.db, entries.into_iter().map(Into::into).collect())
                    .await?;
            Ok(Json(ReorderResponse { updated }).into_response())
        }
        value => {
            let body: UpdateFaqRequest = serde_json::from_value(value)
                .map_err(|err| ApiError::Validation(format!("invalid faq update: {err}")))?;
            let row = FaqService::update(
                &state.db,
                body.id,
                FaqUpdate {
                    question: body.question,
                    answer: body.answer,
                },
            )
            .await?;
            Ok(Json(FaqResponse::from(row)).into_response())
        }
    }
}

/// Remove an FAQ entry
#[utoipa::path(
    delete,
    path = "/faq",
    params(DeleteParams),
    responses(
        (status = 200, description = "FAQ entry deleted"),
        (status = 404, description = "FAQ entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    FaqService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
