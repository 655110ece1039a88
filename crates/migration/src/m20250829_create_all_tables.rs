use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create classes table
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Classes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(
                        ColumnDef::new(Classes::GradeLevel)
                            .small_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::ClassId).uuid().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::RollNumber).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-class_id")
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Email).string().not_null())
                    .col(ColumnDef::new(Teachers::Subject).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create attendance_records table
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::ClassId).uuid().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance_records-student_id")
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance_records-class_id")
                            .from(AttendanceRecords::Table, AttendanceRecords::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create attendance_requests table
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRequests::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRequests::AttendanceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRequests::CurrentStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRequests::RequestedStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRequests::Reason).text().not_null())
                    .col(
                        ColumnDef::new(AttendanceRequests::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance_requests-student_id")
                            .from(AttendanceRequests::Table, AttendanceRequests::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance_requests-attendance_id")
                            .from(AttendanceRequests::Table, AttendanceRequests::AttendanceId)
                            .to(AttendanceRecords::Table, AttendanceRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create assignments table
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::ClassId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::TotalMarks).double().not_null())
                    .col(ColumnDef::new(Assignments::DueDate).date().not_null())
                    .col(ColumnDef::new(Assignments::Kind).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-assignments-class_id")
                            .from(Assignments::Table, Assignments::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create grades table
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Grades::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Grades::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Grades::AssignmentId).uuid().not_null())
                    .col(ColumnDef::new(Grades::Marks).double())
                    .col(ColumnDef::new(Grades::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Grades::SubmittedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-student_id")
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grades-assignment_id")
                            .from(Grades::Table, Grades::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create announcements table
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Body).text().not_null())
                    .col(ColumnDef::new(Announcements::Audience).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create news_posts table
        manager
            .create_table(
                Table::create()
                    .table(NewsPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NewsPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(NewsPosts::Title).string().not_null())
                    .col(ColumnDef::new(NewsPosts::Body).text().not_null())
                    .col(ColumnDef::new(NewsPosts::PublishedOn).date().not_null())
                    .col(
                        ColumnDef::new(NewsPosts::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create faqs table
        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Faqs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Faqs::Question).string().not_null())
                    .col(ColumnDef::new(Faqs::Answer).text().not_null())
                    .col(ColumnDef::new(Faqs::DisplayOrder).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create staff_members table
        manager
            .create_table(
                Table::create()
                    .table(StaffMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StaffMembers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StaffMembers::Name).string().not_null())
                    .col(ColumnDef::new(StaffMembers::Role).string().not_null())
                    .col(ColumnDef::new(StaffMembers::PhotoUrl).string())
                    .col(
                        ColumnDef::new(StaffMembers::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create journey_entries table
        manager
            .create_table(
                Table::create()
                    .table(JourneyEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JourneyEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Year)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JourneyEntries::Title).string().not_null())
                    .col(
                        ColumnDef::new(JourneyEntries::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create timetable_slots table
        manager
            .create_table(
                Table::create()
                    .table(TimetableSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimetableSlots::ClassId).uuid().not_null())
                    .col(
                        ColumnDef::new(TimetableSlots::DayOfWeek)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimetableSlots::Periods).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetable_slots-class_id")
                            .from(TimetableSlots::Table, TimetableSlots::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create fee_structures table
        manager
            .create_table(
                Table::create()
                    .table(FeeStructures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeStructures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeeStructures::ClassId).uuid().not_null())
                    .col(ColumnDef::new(FeeStructures::Name).string().not_null())
                    .col(ColumnDef::new(FeeStructures::Amount).double().not_null())
                    .col(ColumnDef::new(FeeStructures::DueDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fee_structures-class_id")
                            .from(FeeStructures::Table, FeeStructures::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create site_settings table
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteSettings::Scope).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Value).json().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeStructures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableSlots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JourneyEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaffMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NewsPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Classes {
    Table,
    Id,
    Name,
    GradeLevel,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    ClassId,
    Name,
    Email,
    RollNumber,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    Name,
    Email,
    Subject,
}

#[derive(Iden)]
enum AttendanceRecords {
    Table,
    Id,
    StudentId,
    ClassId,
    Date,
    Status,
    Version,
}

#[derive(Iden)]
enum AttendanceRequests {
    Table,
    Id,
    StudentId,
    AttendanceId,
    CurrentStatus,
    RequestedStatus,
    Reason,
    Status,
}

#[derive(Iden)]
enum Assignments {
    Table,
    Id,
    ClassId,
    Title,
    TotalMarks,
    DueDate,
    Kind,
}

#[derive(Iden)]
enum Grades {
    Table,
    Id,
    StudentId,
    AssignmentId,
    Marks,
    Status,
    SubmittedAt,
}

#[derive(Iden)]
enum Announcements {
    Table,
    Id,
    Title,
    Body,
    Audience,
    DisplayOrder,
}

#[derive(Iden)]
enum NewsPosts {
    Table,
    Id,
    Title,
    Body,
    PublishedOn,
    DisplayOrder,
}

#[derive(Iden)]
enum Faqs {
    Table,
    Id,
    Question,
    Answer,
    DisplayOrder,
}

#[derive(Iden)]
enum StaffMembers {
    Table,
    Id,
    Name,
    Role,
    PhotoUrl,
    DisplayOrder,
}

#[derive(Iden)]
enum JourneyEntries {
    Table,
    Id,
    Year,
    Title,
    Description,
    DisplayOrder,
}

#[derive(Iden)]
enum TimetableSlots {
    Table,
    Id,
    ClassId,
    DayOfWeek,
    Periods,
}

#[derive(Iden)]
enum FeeStructures {
    Table,
    Id,
    ClassId,
    Name,
    Amount,
    DueDate,
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    Scope,
    Value,
}
