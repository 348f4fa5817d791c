//! Request and response DTOs.

pub mod request;
pub mod response;

use campus_core::error::AppError;
use validator::Validate;

/// Run `validator` checks on a request payload, mapping failures to a
/// single validation error listing the offending fields.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errors| AppError::validation(errors.to_string()))
}
