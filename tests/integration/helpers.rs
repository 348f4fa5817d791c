//! Shared test helpers for integration tests.
//!
//! Requires a reachable test database; configure it via `config/test.toml`
//! or `CAMPUS_DATABASE__URL`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use campus_api::state::AppState;
use campus_core::config::AppConfig;
use campus_database::repositories::course::CourseRepository;
use campus_database::repositories::user::UserRepository;
use campus_service::course::CourseService;
use campus_service::user::UserService;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for empty bodies).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application against a clean database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = campus_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        campus_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.into_pool();
        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let course_repo = Arc::new(CourseRepository::new(db_pool.clone()));

        let state = AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            user_service: Arc::new(UserService::new(user_repo)),
            course_service: Arc::new(CourseService::new(course_repo)),
        };

        Self {
            router: campus_api::build_router(state),
            db_pool,
        }
    }

    async fn clean_database(pool: &PgPool) {
        sqlx::query("TRUNCATE users, courses RESTART IDENTITY")
            .execute(pool)
            .await
            .expect("Failed to clean database");
    }

    /// Send a request through the router and decode the response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Create a user through the API and return the created record.
    pub async fn create_user(&self, payload: Value) -> Value {
        let response = self.request("POST", "/api/users", Some(payload)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"].clone()
    }
}

/// Minimal student creation payload.
pub fn student_payload(username: &str, email: &str) -> Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "first_name": "J",
        "last_name": "Doe",
        "role": "student",
    })
}

/// Minimal teacher creation payload.
pub fn teacher_payload(username: &str, email: &str) -> Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "first_name": "T",
        "last_name": "Teach",
        "role": "teacher",
    })
}
