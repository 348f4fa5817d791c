//! Maps domain `AppError` to HTTP responses.
//!
//! The actual `impl IntoResponse for AppError` and the `ApiErrorResponse`
//! body live in `campus-core` (alongside `AppError`) so the orphan rule is
//! satisfied. They are re-exported here for the API layer.

pub use campus_core::error::ApiErrorResponse;
