//! HTTP status mapping
//!
//! Turns an error code into a transport status. Only the code string is
//! inspected, never the concrete error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error::{AppError, ErrorCode, ErrorKind};

/// Maps error codes to HTTP status codes.
pub struct HttpStatusCodeMapper;

impl HttpStatusCodeMapper {
    /// Status for a wire code. Unknown codes map to 500.
    pub fn from_code(code: &str) -> StatusCode {
        ErrorCode::parse(code)
            .map(Self::from_error_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Status for a declared code.
    pub const fn from_error_code(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::AliasAlreadyUsed
            | ErrorCode::EmailAlreadyUsed
            | ErrorCode::UserAlreadyLikedPost
            | ErrorCode::UserAlreadyLikedComment
            | ErrorCode::UserAlreadyBlocked => StatusCode::CONFLICT,

            ErrorCode::NotFound | ErrorCode::UserIsNotBlocked => StatusCode::NOT_FOUND,

            ErrorCode::InvalidValueObject
            | ErrorCode::InvalidEntityTimestamps
            | ErrorCode::ExceededPostImageLimit
            | ErrorCode::CannotBlockYourself => StatusCode::UNPROCESSABLE_ENTITY,

            ErrorCode::MissingRequiredFields | ErrorCode::MissingRequiredParameters => {
                StatusCode::BAD_REQUEST
            }

            ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,

            ErrorCode::BlockUserPersistence
            | ErrorCode::PersistenceFailure
            | ErrorCode::UnknownError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.to_response();
        let status = HttpStatusCodeMapper::from_code(&body.code);

        match body.kind {
            ErrorKind::Infrastructure | ErrorKind::Internal => {
                tracing::error!(code = %body.code, error = %self, "Request failed");
            }
            ErrorKind::Domain | ErrorKind::Application => {
                tracing::debug!(code = %body.code, error = %self, "Request rejected");
            }
        }

        (status, Json(body)).into_response()
    }
}
