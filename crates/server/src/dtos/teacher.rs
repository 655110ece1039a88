use database::entities::teachers;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
}

impl From<teachers::Model> for TeacherResponse {
    fn from(teacher: teachers::Model) -> Self {
        Self {
            id: teacher.id.to_string(),
            name: teacher.name,
            email: teacher.email,
            subject: teacher.subject,
        }
    }
}
