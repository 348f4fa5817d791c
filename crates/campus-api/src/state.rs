//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use campus_core::config::AppConfig;
use campus_service::course::CourseService;
use campus_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// User directory service.
    pub user_service: Arc<UserService>,
    /// Course catalog service.
    pub course_service: Arc<CourseService>,
}
