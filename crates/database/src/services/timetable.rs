use crate::entities::{classes, timetable_slots};
use crate::error::{ServiceError, ServiceResult, on_conflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde_json::Value as Json;
use uuid::Uuid;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Debug, Clone)]
pub struct NewTimetableSlot {
    pub class_id: Uuid,
    pub day_of_week: String,
    pub periods: Json,
}

#[derive(Debug, Clone, Default)]
pub struct TimetableSlotUpdate {
    pub day_of_week: Option<String>,
    pub periods: Option<Json>,
}

pub struct TimetableService;

impl TimetableService {
    pub async fn list(
        db: &DatabaseConnection,
        class_id: Option<Uuid>,
    ) -> ServiceResult<Vec<timetable_slots::Model>> {
        let mut query = timetable_slots::Entity::find();
        if let Some(class_id) = class_id {
            query = query.filter(timetable_slots::Column::ClassId.eq(class_id));
        }
        Ok(query.all(db).await?)
    }

    /// One schedule row per (class, weekday); a second POST for the same day
    /// is a conflict, not an overwrite.
    pub async fn create(
        db: &DatabaseConnection,
        input: NewTimetableSlot,
    ) -> ServiceResult<timetable_slots::Model> {
        let day = normalize_day(&input.day_of_week)?;

        classes::Entity::find_by_id(input.class_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("class"))?;

        let slot = timetable_slots::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_id: Set(input.class_id),
            day_of_week: Set(day),
            periods: Set(input.periods),
        };

        slot.insert(db)
            .await
            .map_err(|err| on_conflict(err, "class already has a timetable for this day"))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: TimetableSlotUpdate,
    ) -> ServiceResult<timetable_slots::Model> {
        let slot = timetable_slots::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("timetable slot"))?;

        let mut active: timetable_slots::ActiveModel = slot.into();
        if let Some(day) = changes.day_of_week {
            active.day_of_week = Set(normalize_day(&day)?);
        }
        if let Some(periods) = changes.periods {
            active.periods = Set(periods);
        }

        active
            .update(db)
            .await
            .map_err(|err| on_conflict(err, "class already has a timetable for this day"))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = timetable_slots::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("timetable slot"));
        }
        Ok(())
    }
}

fn normalize_day(day: &str) -> ServiceResult<String> {
    let day = day.to_ascii_lowercase();
    if WEEKDAYS.contains(&day.as_str()) {
        Ok(day)
    } else {
        Err(ServiceError::validation(format!(
            "unknown day of week: {day}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_day() {
        assert_eq!(normalize_day("Monday").unwrap(), "monday");
        assert_eq!(normalize_day("friday").unwrap(), "friday");
        assert!(normalize_day("funday").is_err());
        assert!(normalize_day("").is_err());
    }
}
