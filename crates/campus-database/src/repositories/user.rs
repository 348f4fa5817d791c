//! User repository implementation.
//!
//! Every query the directory service needs is written out as explicit
//! parameterized SQL against the `users` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::user::model::CreateUser;
use campus_entity::user::{User, UserRole};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the stored row.
    ///
    /// `data` must already carry any generated student/employee identifier;
    /// `now` becomes both `created_at` and `updated_at`. Unique-constraint
    /// violations are mapped to a conflict naming the offending field.
    pub async fn insert(&self, data: &CreateUser, now: DateTime<Utc>) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, first_name, last_name, phone_number, role, \
                                student_id, employee_id, department, year_of_study, \
                                date_of_birth, address, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .bind(data.role)
        .bind(&data.student_id)
        .bind(&data.employee_id)
        .bind(&data.department)
        .bind(data.year_of_study)
        .bind(&data.date_of_birth)
        .bind(&data.address)
        .bind(data.is_active.unwrap_or(true))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to create user"))
    }

    /// Write back a mutated user row.
    ///
    /// The service layer does not re-validate email uniqueness on update;
    /// the column constraint is the only guard, so violations are mapped
    /// here as well.
    pub async fn update(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2, first_name = $3, last_name = $4, phone_number = $5, \
                              department = $6, year_of_study = $7, date_of_birth = $8, \
                              address = $9, is_active = $10, updated_at = $11 \
             WHERE id = $1 RETURNING *",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(&user.department)
        .bind(user.year_of_study)
        .bind(&user.date_of_birth)
        .bind(&user.address)
        .bind(user.is_active)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))
    }

    /// Delete a user by id. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Find a user by student identifier.
    pub async fn find_by_student_id(&self, student_id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE student_id = $1")
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by student id", e)
            })
    }

    /// Find a user by employee identifier.
    pub async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by employee id", e)
            })
    }

    /// List all users.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// List users with pagination.
    pub async fn find_all_paginated(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id LIMIT $1 OFFSET $2")
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list users", e)
                })?;

        Ok(PageResponse::new(users, page, total as u64))
    }

    /// List users holding the given role.
    pub async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = $1 ORDER BY id")
            .bind(role)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list users by role", e)
            })
    }

    /// List users in the given department.
    pub async fn find_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE department = $1 ORDER BY id")
            .bind(department)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list users by department", e)
            })
    }

    /// List users matching both role and department.
    pub async fn find_by_role_and_department(
        &self,
        role: UserRole,
        department: &str,
    ) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = $1 AND department = $2 ORDER BY id",
        )
        .bind(role)
        .bind(department)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list users by role and department",
                e,
            )
        })
    }

    /// List users filtered by active flag.
    pub async fn find_by_active(&self, is_active: bool) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE is_active = $1 ORDER BY id")
            .bind(is_active)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list users by active flag", e)
            })
    }

    /// List active users holding the given role.
    pub async fn find_active_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = $1 AND is_active = TRUE ORDER BY id",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active users by role", e)
        })
    }

    /// List active users in the given department.
    pub async fn find_active_by_department(&self, department: &str) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE department = $1 AND is_active = TRUE ORDER BY id",
        )
        .bind(department)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list active users by department",
                e,
            )
        })
    }

    /// Substring search across name, username, and email.
    ///
    /// Case sensitivity follows the store collation (`LIKE`, not `ILIKE`).
    pub async fn search(&self, term: &str) -> AppResult<Vec<User>> {
        let pattern = format!("%{term}%");

        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE first_name LIKE $1 OR last_name LIKE $1 \
                OR username LIKE $1 OR email LIKE $1 \
             ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search users", e))
    }

    /// Whether a user with the given username exists.
    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        self.exists("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)", username)
            .await
    }

    /// Whether a user with the given email exists.
    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)", email)
            .await
    }

    /// Whether a user with the given student identifier exists.
    pub async fn exists_by_student_id(&self, student_id: &str) -> AppResult<bool> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM users WHERE student_id = $1)",
            student_id,
        )
        .await
    }

    /// Whether a user with the given employee identifier exists.
    pub async fn exists_by_employee_id(&self, employee_id: &str) -> AppResult<bool> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM users WHERE employee_id = $1)",
            employee_id,
        )
        .await
    }

    /// Count users holding the given role.
    pub async fn count_by_role(&self, role: UserRole) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count users by role", e)
            })
    }

    async fn exists(&self, query: &str, value: &str) -> AppResult<bool> {
        sqlx::query_scalar(query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to run existence check", e)
            })
    }
}

/// Map a Postgres unique-constraint violation to a conflict naming the field.
fn map_unique_violation(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.constraint() {
            Some("users_username_key") => {
                return AppError::duplicate_key("username", "Username already exists");
            }
            Some("users_email_key") => {
                return AppError::duplicate_key("email", "Email already exists");
            }
            Some("users_student_id_key") => {
                return AppError::duplicate_key("student_id", "Student ID already exists");
            }
            Some("users_employee_id_key") => {
                return AppError::duplicate_key("employee_id", "Employee ID already exists");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
