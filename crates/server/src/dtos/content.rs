//! DTOs for the ordered public-site collections. PUT bodies for these
//! resources are either a single update object or an array of reorder
//! entries; the routes tell them apart by shape.

use chrono::NaiveDate;
use database::entities::{announcements, faqs, journey_entries, news_posts, staff_members};
use database::services::content;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One element of a bulk-reorder PUT payload
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub id: Uuid,
    pub display_order: i32,
}

impl From<ReorderItem> for content::ReorderEntry {
    fn from(item: ReorderItem) -> Self {
        Self {
            id: item.id,
            display_order: item.display_order,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResponse {
    pub updated: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub body: String,
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_audience() -> String {
    "all".to_owned()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub audience: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub audience: String,
    pub display_order: i32,
}

impl From<announcements::Model> for AnnouncementResponse {
    fn from(row: announcements::Model) -> Self {
        Self {
            id: row.id.to_string(),
            title: row.title,
            body: row.body,
            audience: row.audience,
            display_order: row.display_order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsPostRequest {
    pub title: String,
    pub body: String,
    pub published_on: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsPostRequest {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsPostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published_on: NaiveDate,
    pub display_order: i32,
}

impl From<news_posts::Model> for NewsPostResponse {
    fn from(row: news_posts::Model) -> Self {
        Self {
            id: row.id.to_string(),
            title: row.title,
            body: row.body,
            published_on: row.published_on,
            display_order: row.display_order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    pub id: Uuid,
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
}

impl From<faqs::Model> for FaqResponse {
    fn from(row: faqs::Model) -> Self {
        Self {
            id: row.id.to_string(),
            question: row.question,
            answer: row.answer,
            display_order: row.display_order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffMemberRequest {
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffMemberRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
    pub display_order: i32,
}

impl From<staff_members::Model> for StaffMemberResponse {
    fn from(row: staff_members::Model) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            role: row.role,
            photo_url: row.photo_url,
            display_order: row.display_order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJourneyEntryRequest {
    pub year: i16,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJourneyEntryRequest {
    pub id: Uuid,
    pub year: Option<i16>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEntryResponse {
    pub id: String,
    pub year: i16,
    pub title: String,
    pub description: String,
    pub display_order: i32,
}

impl From<journey_entries::Model> for JourneyEntryResponse {
    fn from(row: journey_entries::Model) -> Self {
        Self {
            id: row.id.to_string(),
            year: row.year,
            title: row.title,
            description: row.description,
            display_order: row.display_order,
        }
    }
}
