use chrono::NaiveDate;
use database::entities::fee_structures;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FeeQueryParams {
    pub class_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeeStructureRequest {
    pub class_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeeStructureRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructureResponse {
    pub id: String,
    pub class_id: String,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

impl From<fee_structures::Model> for FeeStructureResponse {
    fn from(fee: fee_structures::Model) -> Self {
        Self {
            id: fee.id.to_string(),
            class_id: fee.class_id.to_string(),
            name: fee.name,
            amount: fee.amount,
            due_date: fee.due_date,
        }
    }
}
