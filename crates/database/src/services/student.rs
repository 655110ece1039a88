use crate::entities::{classes, students};
use crate::error::{ServiceError, ServiceResult};
use crate::services::attendance::AttendanceService;
use futures::future::try_join_all;
use models::attendance::AttendanceStats;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub class_id: Uuid,
    pub name: String,
    pub email: String,
    pub roll_number: i32,
}

#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub class_id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<i32>,
}

pub struct StudentService;

impl StudentService {
    pub async fn list(
        db: &DatabaseConnection,
        class_id: Option<Uuid>,
    ) -> ServiceResult<Vec<students::Model>> {
        let mut query = students::Entity::find();
        if let Some(class_id) = class_id {
            query = query.filter(students::Column::ClassId.eq(class_id));
        }
        Ok(query
            .order_by_asc(students::Column::RollNumber)
            .all(db)
            .await?)
    }

    /// List students with each one's live attendance percentage for the
    /// given month. Stats are batch-computed per class rather than queried
    /// per student.
    pub async fn list_with_attendance(
        db: &DatabaseConnection,
        class_id: Option<Uuid>,
        year: i32,
        month: u32,
    ) -> ServiceResult<Vec<(students::Model, AttendanceStats)>> {
        let students = Self::list(db, class_id).await?;

        let class_ids: HashSet<Uuid> = students.iter().map(|s| s.class_id).collect();
        let per_class = try_join_all(class_ids.into_iter().map(|class_id| {
            AttendanceService::monthly_stats_by_student(db, class_id, year, month)
        }))
        .await?;

        let mut stats_by_student: HashMap<Uuid, AttendanceStats> = HashMap::new();
        for class_stats in per_class {
            stats_by_student.extend(class_stats);
        }

        Ok(students
            .into_iter()
            .map(|student| {
                let stats = stats_by_student
                    .get(&student.id)
                    .copied()
                    .unwrap_or_default();
                (student, stats)
            })
            .collect())
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewStudent,
    ) -> ServiceResult<students::Model> {
        classes::Entity::find_by_id(input.class_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("class"))?;

        let student = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_id: Set(input.class_id),
            name: Set(input.name),
            email: Set(input.email),
            roll_number: Set(input.roll_number),
        };

        Ok(student.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: StudentUpdate,
    ) -> ServiceResult<students::Model> {
        let student = students::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;

        if let Some(class_id) = changes.class_id {
            classes::Entity::find_by_id(class_id)
                .one(db)
                .await?
                .ok_or(ServiceError::NotFound("class"))?;
        }

        let mut active: students::ActiveModel = student.into();
        if let Some(class_id) = changes.class_id {
            active.class_id = Set(class_id);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(roll_number) = changes.roll_number {
            active.roll_number = Set(roll_number);
        }

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = students::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("student"));
        }
        Ok(())
    }
}
