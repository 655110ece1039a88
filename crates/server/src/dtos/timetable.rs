use database::entities::timetable_slots;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TimetableQueryParams {
    pub class_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimetableSlotRequest {
    pub class_id: Uuid,
    pub day_of_week: String,
    /// Array of {subject, startTime, endTime}
    #[schema(value_type = Object)]
    pub periods: serde_json::Value,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimetableSlotRequest {
    pub id: Uuid,
    pub day_of_week: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub periods: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlotResponse {
    pub id: String,
    pub class_id: String,
    pub day_of_week: String,
    #[schema(value_type = Object)]
    pub periods: serde_json::Value,
}

impl From<timetable_slots::Model> for TimetableSlotResponse {
    fn from(slot: timetable_slots::Model) -> Self {
        Self {
            id: slot.id.to_string(),
            class_id: slot.class_id.to_string(),
            day_of_week: slot.day_of_week,
            periods: slot.periods,
        }
    }
}
