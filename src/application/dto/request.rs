//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Bodies whose
//! fields become value objects only check presence here; the value objects
//! own every other rule.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{
    CreateCommentDto, CreatePostDto, RegisterUserDto, UpdateProfileDto,
};
use crate::shared::error::AppError;
use crate::shared::validation::{require_fields, validation_error};

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(required)]
    pub name: Option<String>,

    #[validate(required)]
    pub email: Option<String>,

    #[validate(required)]
    pub alias: Option<String>,

    #[validate(required)]
    pub password: Option<String>,
}

impl RegisterUserRequest {
    pub fn into_dto(self) -> Result<RegisterUserDto, AppError> {
        self.validate().map_err(validation_error)?;
        Ok(RegisterUserDto {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            alias: self.alias.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}

/// Profile update request. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub alias: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileDto {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            alias: request.alias,
            password: request.password,
        }
    }
}

/// Create post request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(required)]
    pub author_id: Option<String>,

    #[validate(required)]
    pub content: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
}

impl CreatePostRequest {
    pub fn into_dto(self) -> Result<CreatePostDto, AppError> {
        self.validate().map_err(validation_error)?;
        Ok(CreatePostDto {
            author_id: self.author_id.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            images: self.images,
        })
    }
}

/// Comment on a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(required)]
    pub author_id: Option<String>,

    #[validate(required)]
    pub content: Option<String>,
}

impl CreateCommentRequest {
    pub fn into_dto(self) -> Result<CreateCommentDto, AppError> {
        self.validate().map_err(validation_error)?;
        Ok(CreateCommentDto {
            author_id: self.author_id.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        })
    }
}

/// Body naming the acting user, e.g. the user who likes a post.
#[derive(Debug, Default, Deserialize)]
pub struct ActorRequest {
    pub user_id: Option<String>,
}

impl ActorRequest {
    pub fn user_id(&self) -> Result<&str, AppError> {
        require_fields(&[("user_id", self.user_id.as_deref())])?;
        Ok(self.user_id.as_deref().unwrap_or_default())
    }
}

/// Block another user
#[derive(Debug, Default, Deserialize)]
pub struct BlockUserRequest {
    pub blocked_id: Option<String>,
}

impl BlockUserRequest {
    pub fn blocked_id(&self) -> Result<&str, AppError> {
        require_fields(&[("blocked_id", self.blocked_id.as_deref())])?;
        Ok(self.blocked_id.as_deref().unwrap_or_default())
    }
}

/// `GET /users?alias=...`
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_lists_every_absent_field() {
        let request: RegisterUserRequest =
            serde_json::from_str(r#"{ "name": "Ada Lovelace" }"#).unwrap();

        let err = request.into_dto().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingRequiredFields);
        assert_eq!(
            err.to_string(),
            "Missing required fields: [alias, email, password]"
        );
    }

    #[test]
    fn test_register_keeps_blank_values_for_value_objects() {
        let request: RegisterUserRequest = serde_json::from_str(
            r#"{ "name": " ", "email": "a@b.io", "alias": "ada", "password": "x" }"#,
        )
        .unwrap();

        assert_eq!(request.into_dto().unwrap().name, " ");
    }

    #[test]
    fn test_create_post_images_default_to_empty() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{ "author_id": "x", "content": "hi" }"#).unwrap();

        assert!(request.into_dto().unwrap().images.is_empty());
    }

    #[test]
    fn test_actor_blank_is_missing() {
        let request = ActorRequest {
            user_id: Some("  ".into()),
        };
        let err = request.user_id().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: [user_id]");
    }
}
