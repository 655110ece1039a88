pub mod attendance;
pub mod attendance_request;
pub mod content;
pub mod fee;
pub mod grade;
pub mod settings;
pub mod student;
pub mod timetable;
