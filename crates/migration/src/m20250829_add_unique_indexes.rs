use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One attendance mark per student per class per day; bulk submission
        // upserts against this key
        manager
            .create_index(
                Index::create()
                    .name("uq_attendance_records_student_class_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::StudentId)
                    .col(AttendanceRecords::ClassId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One submission per student per assignment; duplicates surface as 409
        manager
            .create_index(
                Index::create()
                    .name("uq_grades_student_assignment")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::AssignmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One timetable row per class per weekday
        manager
            .create_index(
                Index::create()
                    .name("uq_timetable_slots_class_day")
                    .table(TimetableSlots::Table)
                    .col(TimetableSlots::ClassId)
                    .col(TimetableSlots::DayOfWeek)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Fee names are unique within a class
        manager
            .create_index(
                Index::create()
                    .name("uq_fee_structures_class_name")
                    .table(FeeStructures::Table)
                    .col(FeeStructures::ClassId)
                    .col(FeeStructures::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Settings upsert keys on scope
        manager
            .create_index(
                Index::create()
                    .name("uq_site_settings_scope")
                    .table(SiteSettings::Table)
                    .col(SiteSettings::Scope)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Covering index for the monthly stats range scan
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_records_class_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::ClassId)
                    .col(AttendanceRecords::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_grades_student_id")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_students_class_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_grades_student_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_records_class_date")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("uq_site_settings_scope").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uq_fee_structures_class_name").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uq_timetable_slots_class_day").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uq_grades_student_assignment").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_attendance_records_student_class_date")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum AttendanceRecords {
    Table,
    StudentId,
    ClassId,
    Date,
}

#[derive(Iden)]
enum Grades {
    Table,
    StudentId,
    AssignmentId,
}

#[derive(Iden)]
enum TimetableSlots {
    Table,
    ClassId,
    DayOfWeek,
}

#[derive(Iden)]
enum FeeStructures {
    Table,
    ClassId,
    Name,
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Scope,
}

#[derive(Iden)]
enum Students {
    Table,
    ClassId,
}
