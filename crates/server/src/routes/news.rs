use crate::dtos::content::{
    CreateNewsPostRequest, NewsPostResponse, ReorderItem, ReorderResponse, UpdateNewsPostRequest,
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
use database::services::content::{NewNewsPost, NewsPostUpdate, NewsService};
use serde_json::Value;

/// List news posts in display order
#[utoipa::path(
    get,
    path = "/news",
    responses(
        (status = 200, description = "News posts retrieved successfully", body = Vec<NewsPostResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn get_news(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsPostResponse>>, ApiError> {
    let rows = NewsService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(NewsPostResponse::from).collect()))
}

/// Publish a news post, appended at the end of the display order
#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsPostRequest,
    responses(
        (status = 201, description = "News post created", body = NewsPostResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn create_news_post(
    State(state): State<AppState>,
    Json(body): Json<CreateNewsPostRequest>,
) -> Result<(StatusCode, Json<NewsPostResponse>), ApiError> {
    let row = NewsService::create(
        &state.db,
        NewNewsPost {
            title: body.title,
            body: body.body,
            published_on: body.published_on,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(NewsPostResponse::from(row))))
}

/// Update one news post, or bulk-reorder the whole collection
#[utoipa::path(
    put,
    path = "/news",
    request_body = UpdateNewsPostRequest,
    responses(
        (status = 200, description = "News post updated", body = NewsPostResponse),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "News post not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn update_news(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match body {
        Value::Array(items) => {
            let entries: Vec<ReorderItem> = serde_json::from_value(Value::Array(items))
                .map_err(|err| ApiError::Validation(format!("invalid reorder entry: {err}")))?;
            let updated =
                NewsService::reorder(&state.db, entries.into_iter().map(Into::into).collect())
                    .await?;
            Ok(Json(ReorderResponse { updated }).into_response())
        }
        value => {
            let body: UpdateNewsPostRequest = serde_json::from_value(value)
                .map_err(|err| ApiError::Validation(format!("invalid news update: {err}")))?;
            let row = NewsService::update(
                &state.db,
                body.id,
                NewsPostUpdate {
                    title: body.title,
                    body: body.body,
                    published_on: body.published_on,
                },
            )
            .await?;
            Ok(Json(NewsPostResponse::from(row)).into_response())
        }
    }
}

/// Remove a news post
#[utoipa::path(
    delete,
    path = "/news",
    params(DeleteParams),
    responses(
        (status = 200, description = "News post deleted"),
        (status = 404, description = "News post not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Content"
)]
pub async fn delete_news_post(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    NewsService::delete(&state.db, params.id).await?;
    Ok(StatusCode::OK)
}
