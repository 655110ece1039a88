use crate::dtos::attendance::{
    AttendanceEntryRequest, AttendanceQueryParams, AttendanceRecordResponse, BulkRecordResponse,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::services::attendance::AttendanceService;
use serde_json::Value;

/// List attendance records, optionally filtered by class and date
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceQueryParams),
    responses(
        (status = 200, description = "Attendance records retrieved successfully", body = Vec<AttendanceRecordResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    Query(params): Query<AttendanceQueryParams>,
) -> Result<Json<Vec<AttendanceRecordResponse>>, ApiError> {
    let records = AttendanceService::list(&state.db, params.class_id, params.date).await?;

    Ok(Json(
        records
            .into_iter()
            .map(AttendanceRecordResponse::from)
            .collect(),
    ))
}

/// Bulk-record attendance for a class.
///
/// The body must be a non-empty array; anything else is rejected before a
/// single write happens. Entries upsert on (studentId, classId, date), so
/// resubmitting a day overwrites the previous marks.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = Vec<AttendanceEntryRequest>,
    responses(
        (status = 201, description = "Attendance recorded", body = BulkRecordResponse),
        (status = 400, description = "Empty or non-array payload"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<BulkRecordResponse>), ApiError> {
    let entries = parse_entries(body)?;

    let applied =
        AttendanceService::record_bulk(&state.db, entries.into_iter().map(Into::into).collect())
            .await?;

    Ok((StatusCode::CREATED, Json(BulkRecordResponse { applied })))
}

/// Shape check happens before any write so a malformed payload gets a 400
/// with a useful message instead of a generic rejection
fn parse_entries(body: Value) -> Result<Vec<AttendanceEntryRequest>, ApiError> {
    match body {
        Value::Array(items) if items.is_empty() => Err(ApiError::validation(
            "attendance payload must be a non-empty array",
        )),
        Value::Array(items) => serde_json::from_value(Value::Array(items))
            .map_err(|err| ApiError::Validation(format!("invalid attendance entry: {err}"))),
        _ => Err(ApiError::validation("attendance payload must be an array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::attendance::AttendanceStatus;
    use serde_json::json;

    #[test]
    fn test_empty_array_is_rejected_with_400() {
        let err = parse_entries(json!([])).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err,
            ApiError::validation("attendance payload must be a non-empty array")
        );
    }

    #[test]
    fn test_non_array_body_is_rejected_with_400() {
        for body in [json!({"studentId": "x"}), json!("present"), json!(null)] {
            let err = parse_entries(body).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                err,
                ApiError::validation("attendance payload must be an array")
            );
        }
    }

    #[test]
    fn test_malformed_entry_is_rejected_with_400() {
        // Missing the date field
        let body = json!([{
            "studentId": "00000000-0000-0000-0000-000000000001",
            "classId": "00000000-0000-0000-0000-000000000002",
            "status": "present"
        }]);
        let err = parse_entries(body).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_well_formed_array_parses() {
        let body = json!([{
            "studentId": "00000000-0000-0000-0000-000000000001",
            "classId": "00000000-0000-0000-0000-000000000002",
            "date": "2025-03-03",
            "status": "late"
        }]);
        let entries = parse_entries(body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, AttendanceStatus::Late);
    }
}
