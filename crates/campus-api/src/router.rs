//! Route definitions for the campus HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(user_routes())
        .merge(course_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// User directory endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/paginated", get(handlers::user::list_users_paginated))
        .route("/users/search", get(handlers::user::search_users))
        .route("/users/active", get(handlers::user::list_active_users))
        .route("/users/inactive", get(handlers::user::list_inactive_users))
        .route(
            "/users/active/role/{role}",
            get(handlers::user::list_active_users_by_role),
        )
        .route(
            "/users/active/department/{department}",
            get(handlers::user::list_active_users_by_department),
        )
        .route(
            "/users/username/{username}",
            get(handlers::user::get_user_by_username),
        )
        .route("/users/email/{email}", get(handlers::user::get_user_by_email))
        .route(
            "/users/student/{student_id}",
            get(handlers::user::get_user_by_student_id),
        )
        .route("/users/role/{role}", get(handlers::user::list_users_by_role))
        .route(
            "/users/role/{role}/department/{department}",
            get(handlers::user::list_users_by_role_and_department),
        )
        .route(
            "/users/department/{department}",
            get(handlers::user::list_users_by_department),
        )
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
        .route("/users/{id}/activate", put(handlers::user::activate_user))
        .route(
            "/users/{id}/deactivate",
            put(handlers::user::deactivate_user),
        )
}

/// Course catalog endpoints.
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::course::list_courses))
        .route("/courses", post(handlers::course::create_course))
        .route(
            "/courses/paginated",
            get(handlers::course::list_courses_paginated),
        )
        .route("/courses/active", get(handlers::course::list_active_courses))
        .route(
            "/courses/code/{course_code}",
            get(handlers::course::get_course_by_code),
        )
        .route(
            "/courses/department/{department}",
            get(handlers::course::list_courses_by_department),
        )
        .route(
            "/courses/instructor/{instructor_id}",
            get(handlers::course::list_courses_by_instructor),
        )
        .route("/courses/{id}", get(handlers::course::get_course))
        .route("/courses/{id}", put(handlers::course::update_course))
        .route("/courses/{id}", delete(handlers::course::delete_course))
        .route(
            "/courses/{id}/activate",
            put(handlers::course::activate_course),
        )
        .route(
            "/courses/{id}/deactivate",
            put(handlers::course::deactivate_course),
        )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
