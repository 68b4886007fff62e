//! Driving port for product comments.

use async_trait::async_trait;

use crate::domain::{Comment, Error, NewComment};

/// Driving port for reading and posting product comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductComments: Send + Sync {
    /// Comments on one product.
    async fn list_comments(&self, product_id: i64) -> Result<Vec<Comment>, Error>;

    /// Post a comment and return the stored comment.
    async fn add_comment(&self, comment: NewComment) -> Result<Comment, Error>;
}
