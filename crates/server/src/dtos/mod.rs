pub mod attendance;
pub mod content;
pub mod fee;
pub mod grade;
pub mod student;
pub mod teacher;
pub mod timetable;
