//! Blog view domain service.
//!
//! Fetches posts through the [`BlogSource`] port and projects them into list
//! cards and article views. Each call performs exactly one network request
//! and rebuilds its view models from scratch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BlogSource, BlogViews, StorefrontApiError};
use crate::domain::{
    Error, NewPost, PostDetail, PostSummary, project_detail, project_summaries,
};

/// Translate a driven-port failure into the domain taxonomy.
pub(crate) fn map_api_error(error: StorefrontApiError) -> Error {
    match error {
        StorefrontApiError::Transport { message } => {
            Error::network_failure(format!("marketplace unreachable: {message}"))
        }
        StorefrontApiError::Timeout { message } => {
            Error::network_failure(format!("marketplace timed out: {message}"))
        }
        StorefrontApiError::Status { status, message } => {
            Error::network_failure(format!("marketplace returned status {status}: {message}"))
                .with_details(serde_json::json!({ "status": status }))
        }
        StorefrontApiError::NotFound { message } => Error::not_found(format!("{message} not found")),
        StorefrontApiError::Decode { message } => {
            Error::malformed_response(format!("marketplace response unreadable: {message}"))
        }
    }
}

/// Blog view service implementing the [`BlogViews`] driving port.
#[derive(Clone)]
pub struct BlogViewService<S> {
    source: Arc<S>,
}

impl<S> BlogViewService<S> {
    /// Create a new service reading posts from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> BlogViews for BlogViewService<S>
where
    S: BlogSource,
{
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, Error> {
        let posts = self.source.list_posts().await.map_err(map_api_error)?;
        let summaries = project_summaries(&posts);
        debug!(count = summaries.len(), "projected blog summaries");
        Ok(summaries)
    }

    async fn get_detail(&self, id: i64) -> Result<PostDetail, Error> {
        let post = self.source.get_post(id).await.map_err(map_api_error)?;
        let detail = project_detail(post);
        debug!(
            post_id = detail.id,
            images = detail.image_urls.len(),
            "projected blog detail"
        );
        Ok(detail)
    }

    async fn create_post(&self, post: NewPost) -> Result<PostDetail, Error> {
        let created = self
            .source
            .create_post(&post)
            .await
            .map_err(map_api_error)?;
        debug!(post_id = created.id, "blog post created");
        Ok(project_detail(created))
    }
}

#[cfg(test)]
#[path = "blog_view_service_tests.rs"]
mod tests;
