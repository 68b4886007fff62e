//! Driven port for reading and publishing blog posts on the marketplace API.
//!
//! The domain owns the post shape and the error contract so projection
//! services stay adapter-agnostic.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{NewPost, RawPost};

define_port_error! {
    /// Errors surfaced while calling the marketplace API.
    pub enum StorefrontApiError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "storefront api transport failed: {message}",
        /// The call exceeded the client timeout.
        Timeout { message: String } =>
            "storefront api timeout: {message}",
        /// The API answered with a non-success status.
        Status { status: u16, message: String } =>
            "storefront api returned status {status}: {message}",
        /// The API reported that the requested resource does not exist.
        NotFound { message: String } =>
            "storefront api resource not found: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "storefront api response decode failed: {message}",
    }
}

/// Port for fetching and creating blog posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogSource: Send + Sync {
    /// Fetch every post in backend order.
    ///
    /// A response whose `result` is absent or not a list yields an empty
    /// vector rather than an error.
    async fn list_posts(&self) -> Result<Vec<RawPost>, StorefrontApiError>;

    /// Fetch one post by identifier.
    ///
    /// Returns [`StorefrontApiError::NotFound`] when the backend has no such
    /// post.
    async fn get_post(&self, id: i64) -> Result<RawPost, StorefrontApiError>;

    /// Publish a new post and return the stored representation.
    async fn create_post(&self, post: &NewPost) -> Result<RawPost, StorefrontApiError>;
}

/// In-memory implementation serving a fixed set of posts.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), storefront::domain::ports::StorefrontApiError> {
/// use storefront::domain::ports::{BlogSource, FixtureBlogSource};
///
/// let source = FixtureBlogSource::default();
/// assert!(source.list_posts().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureBlogSource {
    posts: Vec<RawPost>,
}

impl FixtureBlogSource {
    /// Serve `posts` in the given order.
    pub fn new(posts: Vec<RawPost>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl BlogSource for FixtureBlogSource {
    async fn list_posts(&self) -> Result<Vec<RawPost>, StorefrontApiError> {
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: i64) -> Result<RawPost, StorefrontApiError> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| StorefrontApiError::not_found(format!("blog post {id}")))
    }

    async fn create_post(&self, post: &NewPost) -> Result<RawPost, StorefrontApiError> {
        let next_id = self
            .posts
            .iter()
            .map(|existing| existing.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Ok(RawPost {
            id: next_id,
            title: post.title.clone(),
            content: post.content.clone(),
            author_username: format!("user-{}", post.author_id),
            products: Vec::new(),
            created_at: String::new(),
        })
    }
}
