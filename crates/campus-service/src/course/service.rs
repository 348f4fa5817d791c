//! Course catalog operations. Thin CRUD over the course repository; the
//! course aggregate carries no campus logic beyond persistence and the
//! `updated_at` refresh on every mutation.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::pagination::{PageRequest, PageResponse};
use campus_database::repositories::course::CourseRepository;
use campus_entity::course::model::{CreateCourse, UpdateCourse};
use campus_entity::Course;

/// Handles course catalog operations.
#[derive(Debug, Clone)]
pub struct CourseService {
    course_repo: Arc<CourseRepository>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(course_repo: Arc<CourseRepository>) -> Self {
        Self { course_repo }
    }

    /// Creates a new course. The course code must be unique.
    pub async fn create(&self, data: CreateCourse) -> AppResult<Course> {
        if self.course_repo.exists_by_code(&data.course_code).await? {
            return Err(AppError::duplicate_key(
                "course_code",
                format!("Course code already exists: {}", data.course_code),
            ));
        }

        let course = self.course_repo.insert(&data, Utc::now()).await?;

        info!(
            course_id = course.id,
            course_code = %course.course_code,
            "Course created"
        );

        Ok(course)
    }

    /// Applies a partial update to an existing course. The course code is
    /// not updatable.
    pub async fn update(&self, id: i64, update: UpdateCourse) -> AppResult<Course> {
        let mut course = self.get(id).await?;

        if let Some(course_name) = update.course_name {
            course.course_name = course_name;
        }
        if let Some(description) = update.description {
            course.description = Some(description);
        }
        if let Some(credits) = update.credits {
            course.credits = credits;
        }
        if let Some(department) = update.department {
            course.department = department;
        }
        if let Some(instructor_id) = update.instructor_id {
            course.instructor_id = Some(instructor_id);
        }
        if let Some(max_students) = update.max_students {
            course.max_students = Some(max_students);
        }
        if let Some(current_enrollment) = update.current_enrollment {
            course.current_enrollment = current_enrollment;
        }
        if let Some(is_active) = update.is_active {
            course.is_active = is_active;
        }
        if let Some(semester) = update.semester {
            course.semester = Some(semester);
        }
        if let Some(academic_year) = update.academic_year {
            course.academic_year = Some(academic_year);
        }

        course.updated_at = Utc::now();

        let course = self.course_repo.update(&course).await?;

        info!(course_id = course.id, "Course updated");

        Ok(course)
    }

    /// Deletes a course permanently.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let course = self.get(id).await?;

        self.course_repo.delete(id).await?;

        info!(course_id = id, course_code = %course.course_code, "Course deleted");

        Ok(())
    }

    /// Marks a course active.
    pub async fn activate(&self, id: i64) -> AppResult<Course> {
        self.set_active(id, true).await
    }

    /// Marks a course inactive.
    pub async fn deactivate(&self, id: i64) -> AppResult<Course> {
        self.set_active(id, false).await
    }

    async fn set_active(&self, id: i64, is_active: bool) -> AppResult<Course> {
        let mut course = self.get(id).await?;

        course.is_active = is_active;
        course.updated_at = Utc::now();

        let course = self.course_repo.update(&course).await?;

        info!(course_id = id, is_active, "Course activation changed");

        Ok(course)
    }

    /// Gets a course by id.
    pub async fn get(&self, id: i64) -> AppResult<Course> {
        self.course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course not found with id: {id}")))
    }

    /// Gets a course by its code.
    pub async fn get_by_code(&self, course_code: &str) -> AppResult<Course> {
        self.course_repo
            .find_by_code(course_code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course not found: {course_code}")))
    }

    /// Lists all courses.
    pub async fn list(&self) -> AppResult<Vec<Course>> {
        self.course_repo.find_all().await
    }

    /// Lists courses with pagination.
    pub async fn list_paginated(&self, page: PageRequest) -> AppResult<PageResponse<Course>> {
        self.course_repo.find_all_paginated(&page).await
    }

    /// Lists courses offered by the given department.
    pub async fn list_by_department(&self, department: &str) -> AppResult<Vec<Course>> {
        self.course_repo.find_by_department(department).await
    }

    /// Lists courses taught by the given instructor.
    pub async fn list_by_instructor(&self, instructor_id: i64) -> AppResult<Vec<Course>> {
        self.course_repo.find_by_instructor(instructor_id).await
    }

    /// Lists active courses.
    pub async fn list_active(&self) -> AppResult<Vec<Course>> {
        self.course_repo.find_active().await
    }
}
