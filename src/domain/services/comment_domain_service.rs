use crate::domain::entities::Comment;

pub struct CommentDomainService;

impl CommentDomainService {
    /// Comment with the highest like count. The earliest one in `comments`
    /// wins a tie.
    pub fn most_liked(comments: &[Comment]) -> Option<&Comment> {
        comments.iter().fold(None, |best: Option<&Comment>, comment| match best {
            Some(current) if current.like_count() >= comment.like_count() => Some(current),
            _ => Some(comment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CommentProps, Entity};
    use crate::domain::value_objects::{CommentContent, PostId, UserId};

    fn comment(likes: usize) -> Comment {
        let mut comment = Comment::create(CommentProps::new(
            UserId::generate(),
            PostId::generate(),
            CommentContent::create("hi there").unwrap(),
        ))
        .unwrap();
        for _ in 0..likes {
            comment.increase_like_count();
        }
        comment
    }

    #[test]
    fn test_empty() {
        assert!(CommentDomainService::most_liked(&[]).is_none());
    }

    #[test]
    fn test_most_liked_prefers_first_on_tie() {
        let comments = vec![comment(1), comment(4), comment(4)];
        let best = CommentDomainService::most_liked(&comments).unwrap();
        assert!(best.is_equal(&comments[1]));
    }
}
