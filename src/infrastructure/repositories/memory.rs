//! In-memory repositories
//!
//! Process-local storage used when `database.url` starts with `memory:` and
//! by the integration tests. Every write takes the store's write lock and
//! checks the same unique keys as the PostgreSQL indexes, so concurrent
//! writers see the same domain errors as against the database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    Alias, BlockedUser, BlockedUserRepository, Comment, CommentId, CommentLike,
    CommentLikeRepository, CommentRepository, Email, Entity, Post, PostId, PostLike,
    PostLikeRepository, PostRepository, User, UserId, UserRepository,
};
use crate::infrastructure::database::missing_row;
use crate::shared::error::{AppError, DomainError};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    posts: HashMap<PostId, Post>,
    comments: HashMap<CommentId, Comment>,
    post_likes: HashMap<(UserId, PostId), PostLike>,
    comment_likes: HashMap<(UserId, CommentId), CommentLike>,
    blocks: HashMap<(UserId, UserId), BlockedUser>,
}

impl Tables {
    /// Alias/email index check, ignoring the user being written.
    fn check_user_unique(&self, user: &User) -> Result<(), DomainError> {
        let others = || self.users.values().filter(|u| !u.is_equal(user));

        if others().any(|u| u.email() == user.email()) {
            return Err(DomainError::EmailAlreadyUsed(user.email().to_string()));
        }
        if others().any(|u| u.alias() == user.alias()) {
            return Err(DomainError::AliasAlreadyUsed(user.alias().to_string()));
        }
        Ok(())
    }
}

/// Shared backing store. Cloning is cheap and every clone sees the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository { store: self.clone() }
    }

    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository { store: self.clone() }
    }

    pub fn comments(&self) -> InMemoryCommentRepository {
        InMemoryCommentRepository { store: self.clone() }
    }

    pub fn post_likes(&self) -> InMemoryPostLikeRepository {
        InMemoryPostLikeRepository { store: self.clone() }
    }

    pub fn comment_likes(&self) -> InMemoryCommentLikeRepository {
        InMemoryCommentLikeRepository { store: self.clone() }
    }

    pub fn blocked_users(&self) -> InMemoryBlockedUserRepository {
        InMemoryBlockedUserRepository { store: self.clone() }
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        Ok(self.store.tables.read().users.get(id).cloned())
    }

    async fn find_by_alias(&self, alias: &Alias) -> Result<Option<User>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.users.values().find(|u| u.alias() == alias).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        let tables = self.store.tables.read();
        Ok(tables.users.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        tables.check_user_unique(user)?;
        tables.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        tables.check_user_unique(user)?;
        let existing = tables
            .users
            .get_mut(user.id())
            .ok_or_else(|| missing_row("user", user.id()))?;
        *existing = user.clone();
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryPostRepository {
    store: InMemoryStore,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, AppError> {
        Ok(self.store.tables.read().posts.get(id).cloned())
    }

    async fn find_by_author_id(&self, author_id: &UserId) -> Result<Vec<Post>, AppError> {
        let tables = self.store.tables.read();
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| p.author_id() == author_id)
            .cloned()
            .collect();
        posts.sort_by_key(|p| std::cmp::Reverse(p.created_at()));
        Ok(posts)
    }

    async fn find_liked_by_user_id(&self, user_id: &UserId) -> Result<Vec<Post>, AppError> {
        let tables = self.store.tables.read();
        let mut likes: Vec<&PostLike> = tables
            .post_likes
            .values()
            .filter(|like| like.user_id() == user_id)
            .collect();
        likes.sort_by_key(|like| std::cmp::Reverse(like.created_at()));

        Ok(likes
            .into_iter()
            .filter_map(|like| tables.posts.get(like.post_id()).cloned())
            .collect())
    }

    async fn save(&self, post: &Post) -> Result<(), AppError> {
        self.store
            .tables
            .write()
            .posts
            .insert(post.id().clone(), post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        let existing = tables
            .posts
            .get_mut(post.id())
            .ok_or_else(|| missing_row("post", post.id()))?;
        *existing = post.clone();
        Ok(())
    }

    async fn increment_like_count(&self, id: &PostId) -> Result<i64, AppError> {
        let mut tables = self.store.tables.write();
        let post = tables
            .posts
            .get_mut(id)
            .ok_or_else(|| missing_row("post", id))?;
        post.increase_like_count();
        Ok(post.like_count().value())
    }

    async fn increment_comment_count(&self, id: &PostId) -> Result<i64, AppError> {
        let mut tables = self.store.tables.write();
        let post = tables
            .posts
            .get_mut(id)
            .ok_or_else(|| missing_row("post", id))?;
        post.increase_comment_count();
        Ok(post.comment_count().value())
    }
}

#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, AppError> {
        Ok(self.store.tables.read().comments.get(id).cloned())
    }

    async fn save(&self, comment: &Comment) -> Result<(), AppError> {
        self.store
            .tables
            .write()
            .comments
            .insert(comment.id().clone(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        let existing = tables
            .comments
            .get_mut(comment.id())
            .ok_or_else(|| missing_row("comment", comment.id()))?;
        *existing = comment.clone();
        Ok(())
    }

    async fn increment_like_count(&self, id: &CommentId) -> Result<i64, AppError> {
        let mut tables = self.store.tables.write();
        let comment = tables
            .comments
            .get_mut(id)
            .ok_or_else(|| missing_row("comment", id))?;
        comment.increase_like_count();
        Ok(comment.like_count().value())
    }
}

#[derive(Clone)]
pub struct InMemoryPostLikeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl PostLikeRepository for InMemoryPostLikeRepository {
    async fn find_by_user_and_post(
        &self,
        user_id: &UserId,
        post_id: &PostId,
    ) -> Result<Option<PostLike>, AppError> {
        let key = (user_id.clone(), post_id.clone());
        Ok(self.store.tables.read().post_likes.get(&key).cloned())
    }

    async fn save(&self, like: &PostLike) -> Result<(), AppError> {
        let key = (like.user_id().clone(), like.post_id().clone());
        let mut tables = self.store.tables.write();
        if tables.post_likes.contains_key(&key) {
            return Err(DomainError::UserAlreadyLikedPost.into());
        }
        tables.post_likes.insert(key, like.clone());
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryCommentLikeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CommentLikeRepository for InMemoryCommentLikeRepository {
    async fn find_by_user_and_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<Option<CommentLike>, AppError> {
        let key = (user_id.clone(), comment_id.clone());
        Ok(self.store.tables.read().comment_likes.get(&key).cloned())
    }

    async fn save(&self, like: &CommentLike) -> Result<(), AppError> {
        let key = (like.user_id().clone(), like.comment_id().clone());
        let mut tables = self.store.tables.write();
        if tables.comment_likes.contains_key(&key) {
            return Err(DomainError::UserAlreadyLikedComment.into());
        }
        tables.comment_likes.insert(key, like.clone());
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryBlockedUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BlockedUserRepository for InMemoryBlockedUserRepository {
    async fn is_blocked(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError> {
        let key = (blocker_id.clone(), blocked_id.clone());
        Ok(self.store.tables.read().blocks.contains_key(&key))
    }

    async fn block(&self, blocked_user: &BlockedUser) -> Result<(), AppError> {
        let key = (
            blocked_user.blocker_id().clone(),
            blocked_user.blocked_id().clone(),
        );
        let mut tables = self.store.tables.write();
        if tables.blocks.contains_key(&key) {
            return Err(DomainError::UserAlreadyBlocked(blocked_user.blocked_id().to_string()).into());
        }
        tables.blocks.insert(key, blocked_user.clone());
        Ok(())
    }

    async fn unblock(&self, blocker_id: &UserId, blocked_id: &UserId) -> Result<bool, AppError> {
        let key = (blocker_id.clone(), blocked_id.clone());
        Ok(self.store.tables.write().blocks.remove(&key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Password, PostContent, PostProps, UserProps};
    use crate::shared::error::ErrorCode;

    fn user(alias: &str, email: &str) -> User {
        User::create(UserProps {
            name: Name::create("Tester").unwrap(),
            email: Email::create(email).unwrap(),
            alias: Alias::create(alias).unwrap(),
            password: Password::from_hash("hash"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_user_unique_indexes() {
        let repo = InMemoryStore::new().users();
        repo.save(&user("ada", "ada@example.com")).await.unwrap();

        let err = repo.save(&user("ada", "other@example.com")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::AliasAlreadyUsed);

        let err = repo.save(&user("bob", "ada@example.com")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmailAlreadyUsed);
    }

    #[tokio::test]
    async fn test_update_keeps_own_alias() {
        let repo = InMemoryStore::new().users();
        let mut ada = user("ada", "ada@example.com");
        repo.save(&ada).await.unwrap();

        ada.update_name(crate::domain::Name::create("Ada King").unwrap());
        repo.update(&ada).await.unwrap();

        let stored = repo.find_by_id(ada.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().value(), "Ada King");
    }

    #[tokio::test]
    async fn test_update_of_missing_user_fails() {
        let repo = InMemoryStore::new().users();
        let ghost = user("ghost", "ghost@example.com");

        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::PersistenceFailure);
        assert!(repo.find_by_id(ghost.id()).await.unwrap().is_none());
    }

    fn post(author: &UserId) -> Post {
        Post::create(PostProps::new(
            author.clone(),
            PostContent::create("stored post").unwrap(),
            Vec::new(),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_of_missing_post_fails() {
        let repo = InMemoryStore::new().posts();
        let ghost = post(&UserId::generate());

        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::PersistenceFailure);
    }

    #[tokio::test]
    async fn test_liked_posts_follow_likes() {
        let store = InMemoryStore::new();
        let (posts, likes) = (store.posts(), store.post_likes());
        let (reader, author) = (UserId::generate(), UserId::generate());
        let (first, second, unliked) = (post(&author), post(&author), post(&author));
        for p in [&first, &second, &unliked] {
            posts.save(p).await.unwrap();
        }

        likes.save(&PostLike::create(reader.clone(), first.id().clone()).unwrap()).await.unwrap();
        likes.save(&PostLike::create(reader.clone(), second.id().clone()).unwrap()).await.unwrap();
        likes.save(&PostLike::create(author.clone(), unliked.id().clone()).unwrap()).await.unwrap();

        let liked = posts.find_liked_by_user_id(&reader).await.unwrap();
        let mut ids: Vec<&PostId> = liked.iter().map(|p| p.id()).collect();
        ids.sort_by_key(|id| id.value().to_string());
        let mut expected = vec![first.id(), second.id()];
        expected.sort_by_key(|id| id.value().to_string());
        assert_eq!(ids, expected);

        assert!(posts.find_liked_by_user_id(&UserId::generate()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = InMemoryStore::new();
        let stored = post(&UserId::generate());
        store.posts().save(&stored).await.unwrap();

        let attempts = (0..8).map(|_| {
            let repo = store.posts();
            let id = stored.id().clone();
            tokio::spawn(async move { repo.increment_like_count(&id).await })
        });
        for result in futures::future::join_all(attempts).await {
            result.unwrap().unwrap();
        }

        let post = store.posts().find_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(post.like_count().value(), 8);

        let err = store.posts().increment_like_count(&PostId::generate()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::PersistenceFailure);
    }

    #[tokio::test]
    async fn test_concurrent_likes_store_one() {
        let store = InMemoryStore::new();
        let user = UserId::generate();
        let post = PostId::generate();

        let attempts = (0..8).map(|_| {
            let repo = store.post_likes();
            let like = PostLike::create(user.clone(), post.clone()).unwrap();
            tokio::spawn(async move { repo.save(&like).await })
        });
        let results = futures::future::join_all(attempts).await;

        let stored = results
            .into_iter()
            .filter(|r| matches!(r, Ok(Ok(()))))
            .count();
        assert_eq!(stored, 1);
    }

    #[tokio::test]
    async fn test_block_and_unblock() {
        let repo = InMemoryStore::new().blocked_users();
        let (a, b) = (UserId::generate(), UserId::generate());
        let block = BlockedUser::create(a.clone(), b.clone()).unwrap();

        repo.block(&block).await.unwrap();
        assert!(repo.is_blocked(&a, &b).await.unwrap());
        assert!(!repo.is_blocked(&b, &a).await.unwrap());

        let err = repo.block(&block).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserAlreadyBlocked);

        assert!(repo.unblock(&a, &b).await.unwrap());
        assert!(!repo.unblock(&a, &b).await.unwrap());
    }
}
