//! Pure selections and orderings over posts.

use crate::domain::entities::{Entity, Post};

pub struct PostDomainService;

impl PostDomainService {
    pub fn pinned_posts(posts: &[Post]) -> Vec<&Post> {
        posts.iter().filter(|post| post.is_pinned()).collect()
    }

    pub fn public_posts(posts: &[Post]) -> Vec<&Post> {
        posts.iter().filter(|post| !post.is_private()).collect()
    }

    /// Most liked first. Ties keep their input order.
    pub fn sort_by_most_likes(posts: &[Post]) -> Vec<&Post> {
        let mut sorted: Vec<&Post> = posts.iter().collect();
        sorted.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
        sorted
    }

    /// Newest first.
    pub fn sort_by_created_at(posts: &[Post]) -> Vec<&Post> {
        let mut sorted: Vec<&Post> = posts.iter().collect();
        sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        sorted
    }
}
