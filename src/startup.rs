//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::interfaces::PasswordHasher;
use crate::application::services::{
    BlockService, BlockServiceImpl, LikeRepositories, LikeService, LikeServiceImpl, PostService,
    PostServiceImpl, UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::domain::{
    BlockedUserRepository, CommentLikeRepository, CommentRepository, PostLikeRepository,
    PostRepository, UserRepository,
};
use crate::infrastructure::repositories::{
    InMemoryStore, PgBlockedUserRepository, PgCommentLikeRepository, PgCommentRepository,
    PgPostLikeRepository, PgPostRepository, PgUserRepository,
};
use crate::infrastructure::{database, Argon2PasswordHasher};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub posts: Arc<dyn PostService>,
    pub likes: Arc<dyn LikeService>,
    pub blocks: Arc<dyn BlockService>,
}

/// One repository per entity, for any storage backend.
pub struct Repositories<U, P, C, PL, CL, B> {
    pub users: Arc<U>,
    pub posts: Arc<P>,
    pub comments: Arc<C>,
    pub post_likes: Arc<PL>,
    pub comment_likes: Arc<CL>,
    pub blocked_users: Arc<B>,
}

impl AppState {
    /// Wire every service over the given repositories.
    pub fn new<U, P, C, PL, CL, B>(
        repos: Repositories<U, P, C, PL, CL, B>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self
    where
        U: UserRepository + 'static,
        P: PostRepository + 'static,
        C: CommentRepository + 'static,
        PL: PostLikeRepository + 'static,
        CL: CommentLikeRepository + 'static,
        B: BlockedUserRepository + 'static,
    {
        Self {
            users: Arc::new(UserServiceImpl::new(Arc::clone(&repos.users), hasher)),
            posts: Arc::new(PostServiceImpl::new(
                Arc::clone(&repos.users),
                Arc::clone(&repos.posts),
                Arc::clone(&repos.comments),
            )),
            likes: Arc::new(LikeServiceImpl::new(LikeRepositories {
                users: Arc::clone(&repos.users),
                posts: Arc::clone(&repos.posts),
                comments: Arc::clone(&repos.comments),
                post_likes: repos.post_likes,
                comment_likes: repos.comment_likes,
            })),
            blocks: Arc::new(BlockServiceImpl::new(repos.users, repos.blocked_users)),
        }
    }

    /// Services backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                posts: Arc::new(PgPostRepository::new(pool.clone())),
                comments: Arc::new(PgCommentRepository::new(pool.clone())),
                post_likes: Arc::new(PgPostLikeRepository::new(pool.clone())),
                comment_likes: Arc::new(PgCommentLikeRepository::new(pool.clone())),
                blocked_users: Arc::new(PgBlockedUserRepository::new(pool)),
            },
            Arc::new(Argon2PasswordHasher::new()),
        )
    }

    /// Services backed by a fresh process-local store.
    pub fn in_memory() -> Self {
        Self::in_memory_with(InMemoryStore::new(), Arc::new(Argon2PasswordHasher::new()))
    }

    /// Services backed by `store`, hashing with `hasher`.
    pub fn in_memory_with(store: InMemoryStore, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self::new(
            Repositories {
                users: Arc::new(store.users()),
                posts: Arc::new(store.posts()),
                comments: Arc::new(store.comments()),
                post_likes: Arc::new(store.post_likes()),
                comment_likes: Arc::new(store.comment_likes()),
                blocked_users: Arc::new(store.blocked_users()),
            },
            hasher,
        )
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = if settings.database.is_in_memory() {
            tracing::warn!("Using in-memory repositories; data is lost on shutdown");
            AppState::in_memory()
        } else {
            let pool = database::create_pool(&settings.database).await?;
            tracing::info!("Database connection pool created");

            database::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            AppState::postgres(pool)
        };

        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
