use chrono::NaiveDate;
use database::entities::{attendance_records, attendance_requests};
use database::services::attendance::AttendanceEntry;
use models::{
    attendance::{AttendanceStats, AttendanceStatus},
    request::RequestStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQueryParams {
    pub class_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

/// One element of a teacher's bulk attendance submission
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntryRequest {
    pub student_id: Uuid,
    pub class_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub status: AttendanceStatus,
}

impl From<AttendanceEntryRequest> for AttendanceEntry {
    fn from(req: AttendanceEntryRequest) -> Self {
        Self {
            student_id: req.student_id,
            class_id: req.class_id,
            date: req.date,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkRecordResponse {
    pub applied: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordResponse {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub status: AttendanceStatus,
    pub version: i32,
}

impl From<attendance_records::Model> for AttendanceRecordResponse {
    fn from(record: attendance_records::Model) -> Self {
        Self {
            id: record.id.to_string(),
            student_id: record.student_id.to_string(),
            class_id: record.class_id.to_string(),
            date: record.date,
            status: record.status,
            version: record.version,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatsParams {
    pub student_id: Uuid,
    pub class_id: Option<Uuid>,
    /// Defaults to the current month when omitted
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatsResponse {
    pub total_days: u32,
    pub present_days: u32,
    pub late_days: u32,
    pub absent_days: u32,
    pub attended_days: u32,
    pub percentage: u32,
}

impl From<AttendanceStats> for AttendanceStatsResponse {
    fn from(stats: AttendanceStats) -> Self {
        Self {
            total_days: stats.total_days,
            present_days: stats.present_days,
            late_days: stats.late_days,
            absent_days: stats.absent_days,
            attended_days: stats.attended_days,
            percentage: stats.percentage,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequestQueryParams {
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub status: Option<RequestStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequestBody {
    pub student_id: Uuid,
    pub attendance_id: Uuid,
    #[schema(value_type = String)]
    pub requested_status: AttendanceStatus,
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideAttendanceRequestBody {
    pub id: Uuid,
    /// "approved" or "denied"
    #[schema(value_type = String)]
    pub status: RequestStatus,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequestResponse {
    pub id: String,
    pub student_id: String,
    pub attendance_id: String,
    #[schema(value_type = String)]
    pub current_status: AttendanceStatus,
    #[schema(value_type = String)]
    pub requested_status: AttendanceStatus,
    pub reason: String,
    #[schema(value_type = String)]
    pub status: RequestStatus,
}

impl From<attendance_requests::Model> for AttendanceRequestResponse {
    fn from(request: attendance_requests::Model) -> Self {
        Self {
            id: request.id.to_string(),
            student_id: request.student_id.to_string(),
            attendance_id: request.attendance_id.to_string(),
            current_status: request.current_status,
            requested_status: request.requested_status,
            reason: request.reason,
            status: request.status,
        }
    }
}
