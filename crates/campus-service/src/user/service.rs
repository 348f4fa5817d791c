//! User directory operations: creation with uniqueness validation and id
//! assignment, partial updates, activation toggling, and lookups.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::user::UserRepository;
use campus_entity::user::model::{CreateUser, UpdateUser};
use campus_entity::user::{User, UserRole};

/// Prefix for generated student identifiers.
const STUDENT_ID_PREFIX: &str = "STU";
/// Prefix for generated employee identifiers.
const EMPLOYEE_ID_PREFIX: &str = "EMP";

/// Handles user directory operations.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Creates a new user.
    ///
    /// Uniqueness is validated field by field before the write, first
    /// violation wins: username, then email, then student id, then employee
    /// id. Students and teachers without an explicit identifier get a
    /// generated one. The generated sequence number is derived from current
    /// row counts, so two concurrent creations can collide; the unique
    /// constraints on the users table reject the loser on insert.
    pub async fn create(&self, mut data: CreateUser) -> AppResult<User> {
        if self.user_repo.exists_by_username(&data.username).await? {
            return Err(AppError::duplicate_key(
                "username",
                format!("Username already exists: {}", data.username),
            ));
        }
        if self.user_repo.exists_by_email(&data.email).await? {
            return Err(AppError::duplicate_key(
                "email",
                format!("Email already exists: {}", data.email),
            ));
        }
        if let Some(ref student_id) = data.student_id {
            if self.user_repo.exists_by_student_id(student_id).await? {
                return Err(AppError::duplicate_key(
                    "student_id",
                    format!("Student ID already exists: {student_id}"),
                ));
            }
        }
        if let Some(ref employee_id) = data.employee_id {
            if self.user_repo.exists_by_employee_id(employee_id).await? {
                return Err(AppError::duplicate_key(
                    "employee_id",
                    format!("Employee ID already exists: {employee_id}"),
                ));
            }
        }

        // Admins are counted toward the employee sequence but never receive
        // a generated identifier themselves.
        if data.role == UserRole::Student && data.student_id.is_none() {
            let count = self.user_repo.count_by_role(UserRole::Student).await?;
            data.student_id = Some(format_campus_id(STUDENT_ID_PREFIX, count + 1));
        } else if data.role == UserRole::Teacher && data.employee_id.is_none() {
            let teachers = self.user_repo.count_by_role(UserRole::Teacher).await?;
            let admins = self.user_repo.count_by_role(UserRole::Admin).await?;
            data.employee_id = Some(format_campus_id(EMPLOYEE_ID_PREFIX, teachers + admins + 1));
        }

        let user = self.user_repo.insert(&data, Utc::now()).await?;

        info!(
            user_id = user.id,
            username = %user.username,
            role = %user.role,
            "User created"
        );

        Ok(user)
    }

    /// Applies a partial update to an existing user.
    ///
    /// Only fields present in `update` overwrite the stored record; the
    /// username, role, and campus identifiers are not updatable here.
    pub async fn update(&self, id: i64, update: UpdateUser) -> AppResult<User> {
        let mut user = self.get(id).await?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(department) = update.department {
            user.department = Some(department);
        }
        if let Some(year_of_study) = update.year_of_study {
            user.year_of_study = Some(year_of_study);
        }
        if let Some(date_of_birth) = update.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        if let Some(address) = update.address {
            user.address = Some(address);
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }

        user.updated_at = Utc::now();

        let user = self.user_repo.update(&user).await?;

        info!(user_id = user.id, "User updated");

        Ok(user)
    }

    /// Deletes a user permanently.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        // Existence check first so a missing id maps to NotFound.
        let user = self.get(id).await?;

        self.user_repo.delete(id).await?;

        info!(user_id = id, username = %user.username, "User deleted");

        Ok(())
    }

    /// Marks a user active. Idempotent; still refreshes `updated_at`.
    pub async fn activate(&self, id: i64) -> AppResult<User> {
        self.set_active(id, true).await
    }

    /// Marks a user inactive. Idempotent; still refreshes `updated_at`.
    pub async fn deactivate(&self, id: i64) -> AppResult<User> {
        self.set_active(id, false).await
    }

    async fn set_active(&self, id: i64, is_active: bool) -> AppResult<User> {
        let mut user = self.get(id).await?;

        user.is_active = is_active;
        user.updated_at = Utc::now();

        let user = self.user_repo.update(&user).await?;

        info!(user_id = id, is_active, "User activation changed");

        Ok(user)
    }

    /// Gets a user by id.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found with id: {id}")))
    }

    /// Gets a user by username.
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {username}")))
    }

    /// Gets a user by email.
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {email}")))
    }

    /// Gets a user by student identifier.
    pub async fn get_by_student_id(&self, student_id: &str) -> AppResult<User> {
        self.user_repo
            .find_by_student_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {student_id}")))
    }

    /// Lists all users.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// Lists users with pagination.
    pub async fn list_paginated(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        self.user_repo.find_all_paginated(&page).await
    }

    /// Lists users holding the given role.
    pub async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(role).await
    }

    /// Lists users in the given department.
    pub async fn list_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        self.user_repo.find_by_department(department).await
    }

    /// Lists users matching both role and department.
    pub async fn list_by_role_and_department(
        &self,
        role: UserRole,
        department: &str,
    ) -> AppResult<Vec<User>> {
        self.user_repo
            .find_by_role_and_department(role, department)
            .await
    }

    /// Lists users filtered by active flag.
    pub async fn list_by_active(&self, is_active: bool) -> AppResult<Vec<User>> {
        self.user_repo.find_by_active(is_active).await
    }

    /// Lists active users holding the given role.
    pub async fn list_active_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.user_repo.find_active_by_role(role).await
    }

    /// Lists active users in the given department.
    pub async fn list_active_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        self.user_repo.find_active_by_department(department).await
    }

    /// Substring search across first name, last name, username, and email.
    pub async fn search(&self, term: &str) -> AppResult<Vec<User>> {
        self.user_repo.search(term).await
    }
}

/// Format a campus identifier: prefix plus a six-digit sequence number.
fn format_campus_id(prefix: &str, sequence: i64) -> String {
    format!("{prefix}{sequence:06}")
}
