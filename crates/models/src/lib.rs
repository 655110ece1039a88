pub mod attendance;
pub mod grade;
pub mod request;
