pub mod announcements;
pub mod attendance;
pub mod attendance_requests;
pub mod faqs;
pub mod fees;
pub mod grades;
pub mod health;
pub mod journey;
pub mod news;
pub mod root;
pub mod settings;
pub mod staff;
pub mod students;
pub mod teachers;
pub mod timetable;
