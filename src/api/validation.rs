use validator::Validate;

use crate::api::errors::ApiError;

/// Runs the derived rules on a request body before any service code sees it.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))
}
