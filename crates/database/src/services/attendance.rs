use crate::entities::{attendance_records, students};
use crate::error::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use models::attendance::{self, AttendanceStats, AttendanceStatus};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, OnConflict},
};
use std::collections::HashMap;
use uuid::Uuid;

/// One entry of a teacher's bulk attendance submission
#[derive(Debug, Clone)]
pub struct AttendanceEntry {
    pub student_id: Uuid,
    pub class_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

pub struct AttendanceService;

impl AttendanceService {
    pub async fn list(
        db: &DatabaseConnection,
        class_id: Option<Uuid>,
        date: Option<NaiveDate>,
    ) -> ServiceResult<Vec<attendance_records::Model>> {
        let mut query = attendance_records::Entity::find();

        if let Some(class_id) = class_id {
            query = query.filter(attendance_records::Column::ClassId.eq(class_id));
        }
        if let Some(date) = date {
            query = query.filter(attendance_records::Column::Date.eq(date));
        }

        let records = query
            .order_by_asc(attendance_records::Column::Date)
            .all(db)
            .await?;
        Ok(records)
    }

    /// Apply a teacher's bulk submission as one multi-row upsert keyed on
    /// (student_id, class_id, date).
    ///
    /// Duplicate keys within the batch are collapsed to the last occurrence
    /// before the write; a single INSERT cannot touch the same row twice.
    /// Overwrites bump `version`. Returns the number of rows written.
    pub async fn record_bulk(
        db: &DatabaseConnection,
        entries: Vec<AttendanceEntry>,
    ) -> ServiceResult<usize> {
        if entries.is_empty() {
            return Err(ServiceError::validation(
                "attendance payload must be a non-empty array",
            ));
        }

        let deduped = Self::dedupe_last_wins(entries);
        let applied = deduped.len();

        let rows = deduped
            .into_iter()
            .map(|entry| attendance_records::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(entry.student_id),
                class_id: Set(entry.class_id),
                date: Set(entry.date),
                status: Set(entry.status),
                version: Set(1),
            });

        attendance_records::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    attendance_records::Column::StudentId,
                    attendance_records::Column::ClassId,
                    attendance_records::Column::Date,
                ])
                .update_column(attendance_records::Column::Status)
                .value(
                    attendance_records::Column::Version,
                    Expr::col((
                        attendance_records::Entity,
                        attendance_records::Column::Version,
                    ))
                    .add(1),
                )
                .to_owned(),
            )
            .exec(db)
            .await?;

        Ok(applied)
    }

    /// Collapse in-batch duplicates on the upsert key, keeping the last entry
    pub fn dedupe_last_wins(entries: Vec<AttendanceEntry>) -> Vec<AttendanceEntry> {
        let mut by_key: HashMap<(Uuid, Uuid, NaiveDate), AttendanceEntry> = HashMap::new();
        for entry in entries {
            by_key.insert((entry.student_id, entry.class_id, entry.date), entry);
        }
        by_key.into_values().collect()
    }

    /// Monthly attendance stats for one student, recomputed fresh on every
    /// call. The class defaults to the student's own when not supplied.
    pub async fn monthly_stats(
        db: &DatabaseConnection,
        student_id: Uuid,
        class_id: Option<Uuid>,
        year: i32,
        month: u32,
    ) -> ServiceResult<AttendanceStats> {
        let student = students::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;
        let class_id = class_id.unwrap_or(student.class_id);

        let (first, last) = attendance::month_bounds(year, month)
            .ok_or_else(|| ServiceError::validation("month must be between 1 and 12"))?;

        let records = attendance_records::Entity::find()
            .filter(attendance_records::Column::StudentId.eq(student_id))
            .filter(attendance_records::Column::ClassId.eq(class_id))
            .filter(attendance_records::Column::Date.gte(first))
            .filter(attendance_records::Column::Date.lte(last))
            .all(db)
            .await?;

        Ok(AttendanceStats::tally(
            records.into_iter().map(|record| record.status),
        ))
    }

    /// Monthly stats for every student of a class in one query, grouped in
    /// memory. Students without records simply have no map entry.
    pub async fn monthly_stats_by_student(
        db: &DatabaseConnection,
        class_id: Uuid,
        year: i32,
        month: u32,
    ) -> ServiceResult<HashMap<Uuid, AttendanceStats>> {
        let (first, last) = attendance::month_bounds(year, month)
            .ok_or_else(|| ServiceError::validation("month must be between 1 and 12"))?;

        let records = attendance_records::Entity::find()
            .filter(attendance_records::Column::ClassId.eq(class_id))
            .filter(attendance_records::Column::Date.gte(first))
            .filter(attendance_records::Column::Date.lte(last))
            .all(db)
            .await?;

        let mut statuses_by_student: HashMap<Uuid, Vec<AttendanceStatus>> = HashMap::new();
        for record in records {
            statuses_by_student
                .entry(record.student_id)
                .or_default()
                .push(record.status);
        }

        Ok(statuses_by_student
            .into_iter()
            .map(|(student_id, statuses)| (student_id, AttendanceStats::tally(statuses)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn entry(student: u128, date: &str, status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry {
            student_id: Uuid::from_u128(student),
            class_id: Uuid::from_u128(1),
            date: date.parse().unwrap(),
            status,
        }
    }

    #[test]
    fn test_dedupe_keeps_last_entry_per_key() {
        let entries = vec![
            entry(1, "2025-03-03", AttendanceStatus::Absent),
            entry(2, "2025-03-03", AttendanceStatus::Present),
            entry(1, "2025-03-03", AttendanceStatus::Late),
        ];

        let deduped = AttendanceService::dedupe_last_wins(entries);
        assert_eq!(deduped.len(), 2);

        let student_one = deduped
            .iter()
            .find(|e| e.student_id == Uuid::from_u128(1))
            .unwrap();
        assert_eq!(student_one.status, AttendanceStatus::Late);
    }

    #[test]
    fn test_dedupe_distinct_dates_survive() {
        let entries = vec![
            entry(1, "2025-03-03", AttendanceStatus::Present),
            entry(1, "2025-03-04", AttendanceStatus::Absent),
        ];
        assert_eq!(AttendanceService::dedupe_last_wins(entries).len(), 2);
    }

    #[test]
    fn test_record_bulk_rejects_empty_payload_without_writing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = futures::executor::block_on(AttendanceService::record_bulk(&db, Vec::new()));
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        // Rejected before the connection is touched
        assert!(db.into_transaction_log().is_empty());
    }
}
