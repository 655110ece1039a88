use models::{attendance::AttendanceStatus, request::RequestStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's petition to change one attendance record's status
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub attendance_id: Uuid,
    pub current_status: AttendanceStatus,
    pub requested_status: AttendanceStatus,
    pub reason: String,
    pub status: RequestStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendance_records::Entity",
        from = "Column::AttendanceId",
        to = "super::attendance_records::Column::Id"
    )]
    AttendanceRecord,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecord.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
