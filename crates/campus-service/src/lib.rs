//! # campus-service
//!
//! Business logic services. `user::UserService` is the campus directory:
//! creation-time uniqueness validation, student/employee id assignment,
//! partial updates, and activation toggling. `course::CourseService` is the
//! thinner catalog counterpart.

pub mod course;
pub mod user;

pub use course::CourseService;
pub use user::UserService;
