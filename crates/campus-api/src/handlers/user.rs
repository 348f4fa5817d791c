//! User directory handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use campus_core::error::AppError;
use campus_entity::user::model::{CreateUser, UpdateUser};
use campus_entity::user::{User, UserRole};

use crate::dto::request::{CreateUserRequest, SearchParams, UpdateUserRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate_payload;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.list().await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/paginated
pub async fn list_users_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let page = state
        .user_service
        .list_paginated(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/username/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.get_by_username(&username).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.get_by_email(&email).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/student/{student_id}
pub async fn get_user_by_student_id(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.get_by_student_id(&student_id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/role/{role}
pub async fn list_users_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let role: UserRole = role.parse()?;
    let users = state.user_service.list_by_role(role).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/department/{department}
pub async fn list_users_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.list_by_department(&department).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/role/{role}/department/{department}
pub async fn list_users_by_role_and_department(
    State(state): State<AppState>,
    Path((role, department)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let role: UserRole = role.parse()?;
    let users = state
        .user_service
        .list_by_role_and_department(role, &department)
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/active
pub async fn list_active_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.list_by_active(true).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/inactive
pub async fn list_inactive_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.list_by_active(false).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/active/role/{role}
pub async fn list_active_users_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let role: UserRole = role.parse()?;
    let users = state.user_service.list_active_by_role(role).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/active/department/{department}
pub async fn list_active_users_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state
        .user_service
        .list_active_by_department(&department)
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/search?term=
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.search(&params.term).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    validate_payload(&req)?;
    let role: UserRole = req.role.parse()?;

    let user = state
        .user_service
        .create(CreateUser {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            role,
            student_id: req.student_id,
            employee_id: req.employee_id,
            department: req.department,
            year_of_study: req.year_of_study,
            date_of_birth: req.date_of_birth,
            address: req.address,
            is_active: req.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    validate_payload(&req)?;

    let user = state
        .user_service
        .update(
            id,
            UpdateUser {
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                phone_number: req.phone_number,
                department: req.department,
                year_of_study: req.year_of_study,
                date_of_birth: req.date_of_birth,
                address: req.address,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/users/{id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.activate(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/{id}/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
