use crate::dtos::attendance::AttendanceStatsResponse;
use database::entities::students;
use models::attendance::AttendanceStats;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StudentQueryParams {
    pub class_id: Option<Uuid>,
    /// Attach each student's live attendance percentage for the month
    #[serde(default)]
    pub include_attendance: bool,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: String,
    pub class_id: String,
    pub name: String,
    pub email: String,
    pub roll_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceStatsResponse>,
}

impl StudentResponse {
    pub fn new(student: students::Model, attendance: Option<AttendanceStats>) -> Self {
        Self {
            id: student.id.to_string(),
            class_id: student.class_id.to_string(),
            name: student.name,
            email: student.email,
            roll_number: student.roll_number,
            attendance: attendance.map(AttendanceStatsResponse::from),
        }
    }
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self::new(student, None)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub class_id: Uuid,
    pub name: String,
    pub email: String,
    pub roll_number: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub id: Uuid,
    pub class_id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub id: Uuid,
}
