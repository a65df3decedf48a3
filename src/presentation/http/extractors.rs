//! Custom Extractors
//!
//! Request body parsing whose failures are rendered through the error
//! taxonomy instead of axum's plain-text rejections.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::error::{AppError, ApplicationError};

/// JSON request body.
///
/// An absent or unparsable body is reported as `MISSING_REQUIRED_FIELDS`
/// naming `body`; field-level presence is checked by the request DTOs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_rejection(rejection)),
        }
    }
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
    ApplicationError::MissingRequiredFields(vec!["body".to_string()]).into()
}
