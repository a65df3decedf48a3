//! Application Services
//!
//! Use cases that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: registration and profile management
//! - **BlockService**: blocking and unblocking users
//! - **LikeService**: likes on posts and comments
//! - **PostService**: posts and comments on them

pub mod block_service;
pub mod like_service;
pub mod post_service;
pub mod user_service;

// Re-export user service types
pub use user_service::{RegisterUserDto, UpdateProfileDto, UserDto, UserService, UserServiceImpl};

// Re-export block service types
pub use block_service::{BlockService, BlockServiceImpl, BlockedUserDto};

// Re-export like service types
pub use like_service::{LikeDto, LikeRepositories, LikeService, LikeServiceImpl};

// Re-export post service types
pub use post_service::{
    CommentDto, CreateCommentDto, CreatePostDto, PostDto, PostService, PostServiceImpl,
};
