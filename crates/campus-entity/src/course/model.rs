//! Course entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course offered by a department.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique course code, e.g. `CS101`.
    pub course_code: String,
    /// Course title.
    pub course_name: String,
    /// Course description.
    pub description: Option<String>,
    /// Credit value.
    pub credits: i32,
    /// Owning department.
    pub department: String,
    /// Instructor user id. Not validated against the user store.
    pub instructor_id: Option<i64>,
    /// Enrollment cap.
    pub max_students: Option<i32>,
    /// Current enrollment count.
    pub current_enrollment: i32,
    /// Whether the course is open.
    pub is_active: bool,
    /// Semester label, e.g. `Fall`.
    pub semester: Option<String>,
    /// Academic year label, e.g. `2025-2026`.
    pub academic_year: Option<String>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Whether enrollment has reached the cap.
    pub fn is_full(&self) -> bool {
        matches!(self.max_students, Some(max) if self.current_enrollment >= max)
    }
}

/// Data required to create a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    /// Unique course code.
    pub course_code: String,
    /// Course title.
    pub course_name: String,
    /// Course description.
    pub description: Option<String>,
    /// Credit value.
    pub credits: i32,
    /// Owning department.
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

/// Partial update for an existing course. The course code has no update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourse {
    /// New title.
    pub course_name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New credit value.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn course(max: Option<i32>, enrolled: i32) -> Course {
        Course {
            id: 1,
            course_code: "CS101".into(),
            course_name: "Intro to CS".into(),
            description: None,
            credits: 3,
            department: "CS".into(),
            instructor_id: None,
            max_students: max,
            current_enrollment: enrolled,
            is_active: true,
            semester: None,
            academic_year: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_full() {
        assert!(course(Some(30), 30).is_full());
        assert!(!course(Some(30), 29).is_full());
        assert!(!course(None, 500).is_full());
    }
}
