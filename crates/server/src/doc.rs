use crate::routes::{
    announcements, attendance, attendance_requests, faqs, fees, grades, health, journey, news,
    root, settings, staff, students, teachers, timetable,
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        attendance::get_attendance,
        attendance::record_attendance,
        attendance_requests::get_attendance_requests,
        attendance_requests::create_attendance_request,
        attendance_requests::decide_attendance_request,
        students::get_students,
        students::get_attendance_stats,
        students::create_student,
        students::update_student,
        students::delete_student,
        teachers::get_teachers,
        teachers::create_teacher,
        teachers::update_teacher,
        teachers::delete_teacher,
        grades::get_grades,
        grades::create_grade,
        grades::update_grade,
        grades::get_grade_summary,
        grades::seed_grades,
        grades::clear_grades,
        announcements::get_announcements,
        announcements::create_announcement,
        announcements::update_announcements,
        announcements::delete_announcement,
        news::get_news,
        news::create_news_post,
        news::update_news,
        news::delete_news_post,
        faqs::get_faqs,
        faqs::create_faq,
        faqs::update_faqs,
        faqs::delete_faq,
        staff::get_staff,
        staff::create_staff_member,
        staff::update_staff,
        staff::delete_staff_member,
        journey::get_journey,
        journey::create_journey_entry,
        journey::update_journey,
        journey::delete_journey_entry,
        timetable::get_timetable,
        timetable::create_timetable_slot,
        timetable::update_timetable_slot,
        timetable::delete_timetable_slot,
        fees::get_fees,
        fees::create_fee,
        fees::update_fee,
        fees::delete_fee,
        settings::get_settings,
        settings::put_settings
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Attendance", description = "Attendance records and change requests"),
        (name = "Students", description = "Student roster and attendance stats"),
        (name = "Teachers", description = "Teacher directory"),
        (name = "Grades", description = "Assignment submissions, summaries and sample data"),
        (name = "Content", description = "Ordered public-site collections"),
        (name = "Timetable", description = "Per-class weekly schedules"),
        (name = "Fees", description = "Per-class fee structures"),
        (name = "Settings", description = "Scoped settings documents"),
    ),
    info(
        title = "Campus API",
        version = "1.0.0",
        description = "School management API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
