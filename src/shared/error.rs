//! Application Error Types
//!
//! Every failure raised by the server belongs to exactly one family:
//!
//! - **Domain**: an invariant of the domain model was violated
//! - **Application**: a use-case precondition failed
//! - **Infrastructure**: a collaborator (database, hasher) failed unexpectedly
//! - **Internal**: anything that could not be classified
//!
//! Each error carries a stable [`ErrorCode`]. The HTTP layer only ever looks at
//! that code (see [`super::http_status`]).

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

/// Result type used by the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Domain
    InvalidValueObject,
    InvalidEntityTimestamps,
    AliasAlreadyUsed,
    EmailAlreadyUsed,
    UserAlreadyLikedPost,
    UserAlreadyLikedComment,
    CannotBlockYourself,
    UserAlreadyBlocked,
    ExceededPostImageLimit,

    // Application
    NotFound,
    InvalidCredentials,
    MissingRequiredFields,
    MissingRequiredParameters,
    UserIsNotBlocked,

    // Infrastructure
    BlockUserPersistence,
    PersistenceFailure,

    // Internal
    UnknownError,
}

impl ErrorCode {
    /// Every declared code, in declaration order.
    pub const ALL: [ErrorCode; 17] = [
        Self::InvalidValueObject,
        Self::InvalidEntityTimestamps,
        Self::AliasAlreadyUsed,
        Self::EmailAlreadyUsed,
        Self::UserAlreadyLikedPost,
        Self::UserAlreadyLikedComment,
        Self::CannotBlockYourself,
        Self::UserAlreadyBlocked,
        Self::ExceededPostImageLimit,
        Self::NotFound,
        Self::InvalidCredentials,
        Self::MissingRequiredFields,
        Self::MissingRequiredParameters,
        Self::UserIsNotBlocked,
        Self::BlockUserPersistence,
        Self::PersistenceFailure,
        Self::UnknownError,
    ];

    /// Wire representation of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValueObject => "INVALID_VALUE_OBJECT",
            Self::InvalidEntityTimestamps => "INVALID_ENTITY_TIMESTAMPS",
            Self::AliasAlreadyUsed => "ALIAS_ALREADY_USED",
            Self::EmailAlreadyUsed => "EMAIL_ALREADY_USED",
            Self::UserAlreadyLikedPost => "USER_ALREADY_LIKED_POST",
            Self::UserAlreadyLikedComment => "USER_ALREADY_LIKED_COMMENT",
            Self::CannotBlockYourself => "CANNOT_BLOCK_YOURSELF",
            Self::UserAlreadyBlocked => "USER_ALREADY_BLOCKED",
            Self::ExceededPostImageLimit => "EXCEEDED_POST_IMAGE_LIMIT",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::MissingRequiredParameters => "MISSING_REQUIRED_PARAMETERS",
            Self::UserIsNotBlocked => "USER_IS_NOT_BLOCKED",
            Self::BlockUserPersistence => "BLOCK_USER_PERSISTENCE",
            Self::PersistenceFailure => "PERSISTENCE_FAILURE",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Parse a wire code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error family, rendered as the `type` field of an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Domain,
    Application,
    Infrastructure,
    Internal,
}

/// Violations of domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A value object rejected its input. `field` names the value object.
    #[error("{message}")]
    InvalidValueObject { field: &'static str, message: String },

    #[error("Entity creation date cannot be after updated date")]
    InvalidEntityTimestamps,

    #[error("Alias already used: {0}")]
    AliasAlreadyUsed(String),

    #[error("Email already used: {0}")]
    EmailAlreadyUsed(String),

    #[error("User cannot like a post more than once")]
    UserAlreadyLikedPost,

    #[error("User cannot like a comment more than once")]
    UserAlreadyLikedComment,

    #[error("You cannot block yourself")]
    CannotBlockYourself,

    #[error("User already blocked: {0}")]
    UserAlreadyBlocked(String),

    #[error("It is not possible to add more than {limit} images to a post")]
    ExceededImageLimit { limit: usize },
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidValueObject`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValueObject {
            field,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidValueObject { .. } => ErrorCode::InvalidValueObject,
            Self::InvalidEntityTimestamps => ErrorCode::InvalidEntityTimestamps,
            Self::AliasAlreadyUsed(_) => ErrorCode::AliasAlreadyUsed,
            Self::EmailAlreadyUsed(_) => ErrorCode::EmailAlreadyUsed,
            Self::UserAlreadyLikedPost => ErrorCode::UserAlreadyLikedPost,
            Self::UserAlreadyLikedComment => ErrorCode::UserAlreadyLikedComment,
            Self::CannotBlockYourself => ErrorCode::CannotBlockYourself,
            Self::UserAlreadyBlocked(_) => ErrorCode::UserAlreadyBlocked,
            Self::ExceededImageLimit { .. } => ErrorCode::ExceededPostImageLimit,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::InvalidValueObject { field, .. } => Some(json!({ "field": field })),
            _ => None,
        }
    }
}

fn plural(noun: &str, items: &[String]) -> String {
    if items.len() > 1 {
        format!("{noun}s")
    } else {
        noun.to_string()
    }
}

/// Use-case level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error("Email or password invalid")]
    InvalidCredentials,

    #[error("Missing required {}: [{}]", plural("field", .0), .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Missing required {}: [{}]", plural("parameter", .0), .0.join(", "))]
    MissingRequiredParameters(Vec<String>),

    #[error("User is not blocked")]
    UserIsNotBlocked { user_id: String },
}

impl ApplicationError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::InvalidCredentials => ErrorCode::InvalidCredentials,
            Self::MissingRequiredFields(_) => ErrorCode::MissingRequiredFields,
            Self::MissingRequiredParameters(_) => ErrorCode::MissingRequiredParameters,
            Self::UserIsNotBlocked { .. } => ErrorCode::UserIsNotBlocked,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::UserIsNotBlocked { user_id } => Some(json!({ "userId": user_id })),
            _ => None,
        }
    }
}

/// Collaborator failures. The original cause is kept as text and rendered
/// as `details`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InfrastructureError {
    #[error("Failed to persist blocked user with id: {id}. Reason: {reason}")]
    BlockUserPersistence { id: String, reason: String },

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl InfrastructureError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BlockUserPersistence { .. } => ErrorCode::BlockUserPersistence,
            Self::Persistence(_) => ErrorCode::PersistenceFailure,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::BlockUserPersistence { reason, .. } | Self::Persistence(reason) => {
                Some(json!({ "original": reason }))
            }
        }
    }
}

impl From<sqlx::Error> for InfrastructureError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Application error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain(e) => e.code(),
            Self::Application(e) => e.code(),
            Self::Infrastructure(e) => e.code(),
            Self::Internal(_) => ErrorCode::UnknownError,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Domain,
            Self::Application(_) => ErrorKind::Application,
            Self::Infrastructure(_) => ErrorKind::Infrastructure,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Domain(e) => e.details(),
            Self::Application(e) => e.details(),
            Self::Infrastructure(e) => e.details(),
            Self::Internal(_) => None,
        }
    }

    /// Build the client-visible error body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().as_str().to_string(),
            kind: self.kind(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
