use chrono::NaiveDateTime;
use database::entities::grades;
use database::services::grade::SeedReport;
use models::grade::{GradeSummary, SubmissionStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GradeQueryParams {
    pub student_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GradeSummaryParams {
    pub student_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeRequest {
    pub student_id: Uuid,
    pub assignment_id: Uuid,
    pub marks: Option<f64>,
    #[serde(default = "default_status")]
    #[schema(value_type = String)]
    pub status: SubmissionStatus,
}

fn default_status() -> SubmissionStatus {
    SubmissionStatus::Pending
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGradeRequest {
    pub id: Uuid,
    pub marks: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub status: Option<SubmissionStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    pub id: String,
    pub student_id: String,
    pub assignment_id: String,
    pub marks: Option<f64>,
    #[schema(value_type = String)]
    pub status: SubmissionStatus,
    pub submitted_at: Option<NaiveDateTime>,
}

impl From<grades::Model> for GradeResponse {
    fn from(grade: grades::Model) -> Self {
        Self {
            id: grade.id.to_string(),
            student_id: grade.student_id.to_string(),
            assignment_id: grade.assignment_id.to_string(),
            marks: grade.marks,
            status: grade.status,
            submitted_at: grade.submitted_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeSummaryResponse {
    pub total_marks_earned: f64,
    pub total_marks_possible: f64,
    pub overall_percentage: f64,
    pub gpa: f64,
    pub graded_count: u32,
    pub ungraded_count: u32,
}

impl From<GradeSummary> for GradeSummaryResponse {
    fn from(summary: GradeSummary) -> Self {
        Self {
            total_marks_earned: summary.total_marks_earned,
            total_marks_possible: summary.total_marks_possible,
            overall_percentage: summary.overall_percentage,
            gpa: summary.gpa,
            graded_count: summary.graded_count,
            ungraded_count: summary.ungraded_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedReportResponse {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl From<SeedReport> for SeedReportResponse {
    fn from(report: SeedReport) -> Self {
        Self {
            created: report.created,
            skipped: report.skipped,
            errors: report.errors,
        }
    }
}
