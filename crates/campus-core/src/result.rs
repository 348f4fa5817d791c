//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` for campus service operations.
///
/// Defined once so that every crate does not need to spell out
/// `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
