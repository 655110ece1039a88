use models::attendance::AttendanceStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One student's mark for one day.
///
/// Unique per (student_id, class_id, date); `version` is bumped on every
/// overwrite so lost updates stay observable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub class_id: Uuid,
    pub date: Date,
    pub status: AttendanceStatus,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::attendance_requests::Entity")]
    AttendanceRequests,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::attendance_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
