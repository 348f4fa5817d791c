//! Course catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use campus_core::error::AppError;
use campus_entity::Course;
use campus_entity::course::model::{CreateCourse, UpdateCourse};

use crate::dto::request::{CreateCourseRequest, UpdateCourseRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate_payload;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let courses = state.course_service.list().await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/paginated
pub async fn list_courses_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let page = state
        .course_service
        .list_paginated(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state.course_service.get(id).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// GET /api/courses/code/{course_code}
pub async fn get_course_by_code(
    State(state): State<AppState>,
    Path(course_code): Path<String>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state.course_service.get_by_code(&course_code).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// GET /api/courses/department/{department}
pub async fn list_courses_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let courses = state.course_service.list_by_department(&department).await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/instructor/{instructor_id}
pub async fn list_courses_by_instructor(
    State(state): State<AppState>,
    Path(instructor_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let courses = state
        .course_service
        .list_by_instructor(instructor_id)
        .await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/active
pub async fn list_active_courses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let courses = state.course_service.list_active().await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Course>>), AppError> {
    validate_payload(&req)?;

    let course = state
        .course_service
        .create(CreateCourse {
            course_code: req.course_code,
            course_name: req.course_name,
            description: req.description,
            credits: req.credits,
            department: req.department,
            instructor_id: req.instructor_id,
            max_students: req.max_students,
            semester: req.semester,
            academic_year: req.academic_year,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(course))))
}

/// PUT /api/courses/{id}
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    validate_payload(&req)?;

    let course = state
        .course_service
        .update(
            id,
            UpdateCourse {
                course_name: req.course_name,
                description: req.description,
                credits: req.credits,
                department: req.department,
                instructor_id: req.instructor_id,
                max_students: req.max_students,
                current_enrollment: req.current_enrollment,
                is_active: req.is_active,
                semester: req.semester,
                academic_year: req.academic_year,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(course)))
}

/// DELETE /api/courses/{id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/courses/{id}/activate
pub async fn activate_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state.course_service.activate(id).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// PUT /api/courses/{id}/deactivate
pub async fn deactivate_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state.course_service.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(course)))
}
