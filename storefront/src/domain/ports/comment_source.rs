//! Driven port for product comments on the marketplace API.

use async_trait::async_trait;

use super::StorefrontApiError;
use crate::domain::{Comment, NewComment};

/// Port for listing and posting product comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch the comments on one product, oldest first as the backend orders
    /// them. A non-list `result` yields an empty vector.
    async fn list_comments(&self, product_id: i64) -> Result<Vec<Comment>, StorefrontApiError>;

    /// Post a comment and return the stored representation.
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, StorefrontApiError>;
}

/// Fixture implementation with no stored comments that echoes submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCommentSource;

#[async_trait]
impl CommentSource for FixtureCommentSource {
    async fn list_comments(&self, _product_id: i64) -> Result<Vec<Comment>, StorefrontApiError> {
        Ok(Vec::new())
    }

    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, StorefrontApiError> {
        Ok(Comment {
            id: 1,
            product_id: comment.product_id,
            user_id: comment.user_id,
            username: None,
            content: comment.content.clone(),
            created_at: None,
        })
    }
}
