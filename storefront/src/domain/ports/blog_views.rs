//! Driving port for blog view models.
//!
//! Presentation adapters use this port to obtain list cards and article
//! views without knowing how posts are fetched.

use async_trait::async_trait;

use crate::domain::{Error, NewPost, PostDetail, PostSummary};

/// Driving port producing blog view models.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), storefront::domain::Error> {
/// use std::sync::Arc;
///
/// use storefront::domain::BlogViewService;
/// use storefront::domain::ports::{BlogViews, FixtureBlogSource};
///
/// let views = BlogViewService::new(Arc::new(FixtureBlogSource::default()));
/// assert!(views.list_summaries().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogViews: Send + Sync {
    /// List cards for every post, in backend order.
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, Error>;

    /// Article view for one post.
    async fn get_detail(&self, id: i64) -> Result<PostDetail, Error>;

    /// Publish a post and return its article view.
    async fn create_post(&self, post: NewPost) -> Result<PostDetail, Error>;
}
