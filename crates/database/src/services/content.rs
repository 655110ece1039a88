//! CRUD and bulk reordering for the ordered content collections backing the
//! public site: announcements, news, FAQ, staff directory, journey timeline.
//!
//! Reordering is a bulk write of `display_order`, applied inside one
//! transaction; an unknown id aborts the whole batch.

use crate::entities::{announcements, faqs, journey_entries, news_posts, staff_members};
use crate::error::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

/// One element of a bulk-reorder payload
#[derive(Debug, Clone, Copy)]
pub struct ReorderEntry {
    pub id: Uuid,
    pub display_order: i32,
}

pub struct AnnouncementService;

#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub body: String,
    pub audience: String,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub audience: Option<String>,
}

impl AnnouncementService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<announcements::Model>> {
        Ok(announcements::Entity::find()
            .order_by_asc(announcements::Column::DisplayOrder)
            .all(db)
            .await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewAnnouncement,
    ) -> ServiceResult<announcements::Model> {
        let next_order = announcements::Entity::find().count(db).await? as i32;

        let row = announcements::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            body: Set(input.body),
            audience: Set(input.audience),
            display_order: Set(next_order),
        };
        Ok(row.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: AnnouncementUpdate,
    ) -> ServiceResult<announcements::Model> {
        let row = announcements::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("announcement"))?;

        let mut active: announcements::ActiveModel = row.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(body) = changes.body {
            active.body = Set(body);
        }
        if let Some(audience) = changes.audience {
            active.audience = Set(audience);
        }
        Ok(active.update(db).await?)
    }

    pub async fn reorder(db: &DatabaseConnection, entries: Vec<ReorderEntry>) -> ServiceResult<usize> {
        let txn = db.begin().await?;
        for entry in &entries {
            let row = announcements::Entity::find_by_id(entry.id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("announcement"))?;
            let mut active: announcements::ActiveModel = row.into();
            active.display_order = Set(entry.display_order);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(entries.len())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = announcements::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("announcement"));
        }
        Ok(())
    }
}

pub struct NewsService;

#[derive(Debug, Clone)]
pub struct NewNewsPost {
    pub title: String,
    pub body: String,
    pub published_on: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct NewsPostUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published_on: Option<NaiveDate>,
}

impl NewsService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<news_posts::Model>> {
        Ok(news_posts::Entity::find()
            .order_by_asc(news_posts::Column::DisplayOrder)
            .all(db)
            .await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewNewsPost,
    ) -> ServiceResult<news_posts::Model> {
        let next_order = news_posts::Entity::find().count(db).await? as i32;

        let row = news_posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            body: Set(input.body),
            published_on: Set(input.published_on),
            display_order: Set(next_order),
        };
        Ok(row.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: NewsPostUpdate,
    ) -> ServiceResult<news_posts::Model> {
        let row = news_posts::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("news post"))?;

        let mut active: news_posts::ActiveModel = row.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(body) = changes.body {
            active.body = Set(body);
        }
        if let Some(published_on) = changes.published_on {
            active.published_on = Set(published_on);
        }
        Ok(active.update(db).await?)
    }

    pub async fn reorder(db: &DatabaseConnection, entries: Vec<ReorderEntry>) -> ServiceResult<usize> {
        let txn = db.begin().await?;
        for entry in &entries {
            let row = news_posts::Entity::find_by_id(entry.id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("news post"))?;
            let mut active: news_posts::ActiveModel = row.into();
            active.display_order = Set(entry.display_order);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(entries.len())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = news_posts::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("news post"));
        }
        Ok(())
    }
}

pub struct FaqService;

#[derive(Debug, Clone)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct FaqUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl FaqService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<faqs::Model>> {
        Ok(faqs::Entity::find()
            .order_by_asc(faqs::Column::DisplayOrder)
            .all(db)
            .await?)
    }

    pub async fn create(db: &DatabaseConnection, input: NewFaq) -> ServiceResult<faqs::Model> {
        let next_order = faqs::Entity::find().count(db).await? as i32;

        let row = faqs::ActiveModel {
            id: Set(Uuid::new_v4()),
            question: Set(input.question),
            answer: Set(input.answer),
            display_order: Set(next_order),
        };
        Ok(row.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: FaqUpdate,
    ) -> ServiceResult<faqs::Model> {
        let row = faqs::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("faq"))?;

        let mut active: faqs::ActiveModel = row.into();
        if let Some(question) = changes.question {
            active.question = Set(question);
        }
        if let Some(answer) = changes.answer {
            active.answer = Set(answer);
        }
        Ok(active.update(db).await?)
    }

    pub async fn reorder(db: &DatabaseConnection, entries: Vec<ReorderEntry>) -> ServiceResult<usize> {
        let txn = db.begin().await?;
        for entry in &entries {
            let row = faqs::Entity::find_by_id(entry.id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("faq"))?;
            let mut active: faqs::ActiveModel = row.into();
            active.display_order = Set(entry.display_order);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(entries.len())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = faqs::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("faq"));
        }
        Ok(())
    }
}

pub struct StaffService;

#[derive(Debug, Clone)]
pub struct NewStaffMember {
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StaffMemberUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo_url: Option<String>,
}

impl StaffService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<staff_members::Model>> {
        Ok(staff_members::Entity::find()
            .order_by_asc(staff_members::Column::DisplayOrder)
            .all(db)
            .await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewStaffMember,
    ) -> ServiceResult<staff_members::Model> {
        let next_order = staff_members::Entity::find().count(db).await? as i32;

        let row = staff_members::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            role: Set(input.role),
            photo_url: Set(input.photo_url),
            display_order: Set(next_order),
        };
        Ok(row.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: StaffMemberUpdate,
    ) -> ServiceResult<staff_members::Model> {
        let row = staff_members::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("staff member"))?;

        let mut active: staff_members::ActiveModel = row.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(role) = changes.role {
            active.role = Set(role);
        }
        if let Some(photo_url) = changes.photo_url {
            active.photo_url = Set(Some(photo_url));
        }
        Ok(active.update(db).await?)
    }

    pub async fn reorder(db: &DatabaseConnection, entries: Vec<ReorderEntry>) -> ServiceResult<usize> {
        let txn = db.begin().await?;
        for entry in &entries {
            let row = staff_members::Entity::find_by_id(entry.id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("staff member"))?;
            let mut active: staff_members::ActiveModel = row.into();
            active.display_order = Set(entry.display_order);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(entries.len())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = staff_members::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("staff member"));
        }
        Ok(())
    }
}

pub struct JourneyService;

#[derive(Debug, Clone)]
pub struct NewJourneyEntry {
    pub year: i16,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct JourneyEntryUpdate {
    pub year: Option<i16>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl JourneyService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<journey_entries::Model>> {
        Ok(journey_entries::Entity::find()
            .order_by_asc(journey_entries::Column::DisplayOrder)
            .all(db)
            .await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewJourneyEntry,
    ) -> ServiceResult<journey_entries::Model> {
        let next_order = journey_entries::Entity::find().count(db).await? as i32;

        let row = journey_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            year: Set(input.year),
            title: Set(input.title),
            description: Set(input.description),
            display_order: Set(next_order),
        };
        Ok(row.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: JourneyEntryUpdate,
    ) -> ServiceResult<journey_entries::Model> {
        let row = journey_entries::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("journey entry"))?;

        let mut active: journey_entries::ActiveModel = row.into();
        if let Some(year) = changes.year {
            active.year = Set(year);
        }
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        Ok(active.update(db).await?)
    }

    pub async fn reorder(db: &DatabaseConnection, entries: Vec<ReorderEntry>) -> ServiceResult<usize> {
        let txn = db.begin().await?;
        for entry in &entries {
            let row = journey_entries::Entity::find_by_id(entry.id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("journey entry"))?;
            let mut active: journey_entries::ActiveModel = row.into();
            active.display_order = Set(entry.display_order);
            active.update(&txn).await?;
        }
        txn.commit().await?;
        Ok(entries.len())
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = journey_entries::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("journey entry"));
        }
        Ok(())
    }
}
