use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use database::services::settings::SettingsService;
use serde_json::Value;

/// Fetch the stored settings document for one scope
#[utoipa::path(
    get,
    path = "/settings/{scope}",
    params(
        ("scope" = String, Path, description = "Settings scope, e.g. \"site\" or \"academics\"")
    ),
    responses(
        (status = 200, description = "Settings retrieved successfully", content_type = "application/json", body = Object),
        (status = 404, description = "No settings stored for this scope"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let row = SettingsService::get(&state.db, &scope).await?;
    Ok(Json(row.value))
}

/// Replace the settings document for one scope.
///
/// The body is stored as-is; a later GET returns exactly what was PUT.
#[utoipa::path(
    put,
    path = "/settings/{scope}",
    params(
        ("scope" = String, Path, description = "Settings scope")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Settings stored", content_type = "application/json", body = Object),
        (status = 400, description = "Empty scope"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Settings"
)]
pub async fn put_settings(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let row = SettingsService::put(&state.db, &scope, body).await?;
    Ok(Json(row.value))
}
