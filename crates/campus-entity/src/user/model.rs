//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user of the campus system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Email address (unique).
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Campus role, fixed at creation.
    pub role: UserRole,
    /// Student identifier, unique when present. Auto-assigned for students.
    pub student_id: Option<String>,
    /// Employee identifier, unique when present. Auto-assigned for teachers.
    pub employee_id: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Year of study (students only, by convention).
    pub year_of_study: Option<i32>,
    /// Date of birth, stored as free text.
    pub date_of_birth: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username (unique).
    pub username: String,
    /// Email address (unique).
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Explicit student identifier. Generated when absent for students.
    pub student_id: Option<String>,
    /// Explicit employee identifier. Generated when absent for teachers.
    pub employee_id: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Year of study.
    pub year_of_study: Option<i32>,
    /// Date of birth.
    pub date_of_birth: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Initial active flag; defaults to active.
    pub is_active: Option<bool>,
}

/// Partial update for an existing user.
///
/// Only fields that are `Some` overwrite the stored record. The username,
/// role, student and employee identifiers have no update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = User {
            id: 1,
            username: "jdoe".into(),
            email: "j@x.edu".into(),
            first_name: "J".into(),
            last_name: "Doe".into(),
            phone_number: None,
            role: UserRole::Student,
            student_id: Some("STU000001".into()),
            employee_id: None,
            department: None,
            year_of_study: None,
            date_of_birth: None,
            address: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "J Doe");
    }
}
