pub mod announcements;
pub mod assignments;
pub mod attendance_records;
pub mod attendance_requests;
pub mod classes;
pub mod fee_structures;
pub mod faqs;
pub mod grades;
pub mod journey_entries;
pub mod news_posts;
pub mod site_settings;
pub mod staff_members;
pub mod students;
pub mod teachers;
pub mod timetable_slots;
