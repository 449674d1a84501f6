use crate::errors::AppError;
use validator::Validate;

/// Runs the derived rules and collapses any failure into one validation
/// error carrying `message`.
pub fn validate_payload<T: Validate>(payload: &T, message: &str) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        log::debug!("payload rejected: {}", err);
        AppError::Validation(message.to_string())
    })
}
