//! Product comment domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::blog_view_service::map_api_error;
use crate::domain::ports::{CommentSource, ProductComments};
use crate::domain::{Comment, Error, NewComment};

/// Comment service implementing the [`ProductComments`] driving port.
#[derive(Clone)]
pub struct CommentService<S> {
    source: Arc<S>,
}

impl<S> CommentService<S> {
    /// Create a new service reading comments from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> ProductComments for CommentService<S>
where
    S: CommentSource,
{
    async fn list_comments(&self, product_id: i64) -> Result<Vec<Comment>, Error> {
        let comments = self
            .source
            .list_comments(product_id)
            .await
            .map_err(map_api_error)?;
        debug!(product_id, count = comments.len(), "loaded product comments");
        Ok(comments)
    }

    async fn add_comment(&self, comment: NewComment) -> Result<Comment, Error> {
        let stored = self
            .source
            .add_comment(&comment)
            .await
            .map_err(map_api_error)?;
        debug!(
            product_id = stored.product_id,
            comment_id = stored.id,
            "product comment added"
        );
        Ok(stored)
    }
}
