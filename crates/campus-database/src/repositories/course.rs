//! Course repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_entity::course::model::CreateCourse;
use campus_entity::Course;

/// Repository for course CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new course and return the stored row.
    pub async fn insert(&self, data: &CreateCourse, now: DateTime<Utc>) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (course_code, course_name, description, credits, department, \
                                  instructor_id, max_students, current_enrollment, is_active, \
                                  semester, academic_year, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0, TRUE, $8, $9, $10, $10) \
             RETURNING *",
        )
        .bind(&data.course_code)
        .bind(&data.course_name)
        .bind(&data.description)
        .bind(data.credits)
        .bind(&data.department)
        .bind(data.instructor_id)
        .bind(data.max_students)
        .bind(&data.semester)
        .bind(&data.academic_year)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.constraint() == Some("courses_course_code_key") {
                    return AppError::duplicate_key("course_code", "Course code already exists");
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to create course", e)
        })
    }

    /// Write back a mutated course row.
    pub async fn update(&self, course: &Course) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET course_name = $2, description = $3, credits = $4, \
                                department = $5, instructor_id = $6, max_students = $7, \
                                current_enrollment = $8, is_active = $9, semester = $10, \
                                academic_year = $11, updated_at = $12 \
             WHERE id = $1 RETURNING *",
        )
        .bind(course.id)
        .bind(&course.course_name)
        .bind(&course.description)
        .bind(course.credits)
        .bind(&course.department)
        .bind(course.instructor_id)
        .bind(course.max_students)
        .bind(course.current_enrollment)
        .bind(course.is_active)
        .bind(&course.semester)
        .bind(&course.academic_year)
        .bind(course.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update course", e))?
        .ok_or_else(|| AppError::not_found(format!("Course {} not found", course.id)))
    }

    /// Delete a course by id. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete course", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Find a course by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find course by id", e)
            })
    }

    /// Find a course by its code.
    pub async fn find_by_code(&self, course_code: &str) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_code = $1")
            .bind(course_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find course by code", e)
            })
    }

    /// List all courses.
    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))
    }

    /// List courses with pagination.
    pub async fn find_all_paginated(&self, page: &PageRequest) -> AppResult<PageResponse<Course>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count courses", e)
            })?;

        let courses =
            sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY id LIMIT $1 OFFSET $2")
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list courses", e)
                })?;

        Ok(PageResponse::new(courses, page, total as u64))
    }

    /// List courses offered by the given department.
    pub async fn find_by_department(&self, department: &str) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE department = $1 ORDER BY id")
            .bind(department)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to list courses by department",
                    e,
                )
            })
    }

    /// List courses taught by the given instructor.
    pub async fn find_by_instructor(&self, instructor_id: i64) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE instructor_id = $1 ORDER BY id")
            .bind(instructor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to list courses by instructor",
                    e,
                )
            })
    }

    /// List active courses.
    pub async fn find_active(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE is_active = TRUE ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active courses", e)
            })
    }

    /// Whether a course with the given code exists.
    pub async fn exists_by_code(&self, course_code: &str) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE course_code = $1)")
            .bind(course_code)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to run existence check", e)
            })
    }
}
