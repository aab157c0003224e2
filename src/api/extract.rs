use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::validation::validate_payload;

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Malformed or incomplete bodies are answered with the same 400 error body as
/// rule violations instead of axum's plain-text rejection.
#[derive(Debug)]
pub(crate) struct ValidatedJson<T>(pub(crate) T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        validate_payload(&payload)?;
        Ok(Self(payload))
    }
}
