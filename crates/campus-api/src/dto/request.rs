//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username (unique).
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    pub username: String,
    /// Email (unique).
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// First name.
    #[validate(length(min = 1, message = "is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "is required"))]
    pub last_name: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Role: `student`, `teacher`, or `admin`.
    pub role: String,
    /// Explicit student identifier (generated for students when absent).
    pub student_id: Option<String>,
    /// Explicit employee identifier (generated for teachers when absent).
    pub employee_id: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Year of study.
    pub year_of_study: Option<i32>,
    /// Date of birth (free text).
    pub date_of_birth: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Initial active flag (defaults to active).
    pub is_active: Option<bool>,
}

/// Partial user update request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New year of study.
    pub year_of_study: Option<i32>,
    /// New date of birth.
    pub date_of_birth: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Create course request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    /// Course code (unique).
    #[validate(length(min = 1, message = "is required"))]
    pub course_code: String,
    /// Course title.
    #[validate(length(min = 1, message = "is required"))]
    pub course_name: String,
    /// Description.
    pub description: Option<String>,
    /// Credit value.
    #[validate(range(min = 1, message = "must be positive"))]
    pub credits: i32,
    /// Owning department.
    #[validate(length(min = 1, message = "is required"))]
    pub department: String,
    /// Instructor user id.
    pub instructor_id: Option<i64>,
    /// Enrollment cap.
    pub max_students: Option<i32>,
    /// Semester label.
    pub semester: Option<String>,
    /// Academic year label.
    pub academic_year: Option<String>,
}

/// Partial course update request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    /// New title.
    pub course_name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New credit value.
    #[validate(range(min = 1, message = "must be positive"))]
    pub credits: Option<i32>,
    /// New department.
    pub department: Option<String>,
    /// New instructor user id.
    pub instructor_id: Option<i64>,
    /// New enrollment cap.
    pub max_students: Option<i32>,
    /// New enrollment count.
    pub current_enrollment: Option<i32>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New semester label.
    pub semester: Option<String>,
    /// New academic year label.
    pub academic_year: Option<String>,
}

/// Query parameters for user search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Substring to match against names, username, and email.
    pub term: String,
}
