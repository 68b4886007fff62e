//! Reqwest-backed marketplace API adapter.
//!
//! This adapter owns transport details only: endpoint construction, timeout
//! and HTTP error mapping, and decoding the response envelope into domain
//! records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    CommentDto, EnvelopeDto, NewCommentBody, NewPostBody, RawPostDto, decode_envelope,
};
use crate::domain::ports::{BlogSource, CommentSource, StorefrontApiError};
use crate::domain::{Comment, NewComment, NewPost, RawPost};

const DEFAULT_USER_AGENT: &str = "storefront-client/0.1";
const BLOGS_PATH: &str = "api/blogs";
const COMMENTS_PATH: &str = "product-comment-controller/getComments";
const ADD_COMMENT_PATH: &str = "product-comment-controller/addComment";

/// Outbound identity sent with every marketplace request.
pub struct StorefrontHttpIdentity {
    /// HTTP user-agent header value.
    pub user_agent: String,
}

impl Default for StorefrontHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Marketplace API adapter issuing one HTTP request per port call.
pub struct StorefrontHttpApi {
    client: Client,
    base_url: Url,
}

impl StorefrontHttpApi {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let api = StorefrontHttpApi::new(base_url, Duration::from_secs(10));
    /// assert!(api.is_ok() || api.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(base_url, timeout, StorefrontHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: StorefrontHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(identity.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorefrontApiError> {
        self.base_url.join(path).map_err(|error| {
            StorefrontApiError::transport(format!("invalid endpoint {path}: {error}"))
        })
    }

    async fn send(
        &self,
        request: RequestBuilder,
        subject: &str,
    ) -> Result<EnvelopeDto, StorefrontApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref(), subject));
        }

        let envelope = decode_envelope(body.as_ref()).map_err(StorefrontApiError::decode)?;
        debug!(
            subject,
            status = status.as_u16(),
            code = ?envelope.code,
            message = ?envelope.message,
            "storefront api responded"
        );
        Ok(envelope)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        subject: &str,
    ) -> Result<Vec<T>, StorefrontApiError> {
        let envelope = self.send(request, subject).await?;
        match envelope.into_list(subject) {
            Some(items) => Ok(items),
            None => {
                warn!(subject, "list result is missing or not an array; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_item<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        subject: &str,
    ) -> Result<Option<T>, StorefrontApiError> {
        let envelope = self.send(request, subject).await?;
        envelope.into_item().map_err(StorefrontApiError::decode)
    }
}

#[async_trait]
impl BlogSource for StorefrontHttpApi {
    async fn list_posts(&self) -> Result<Vec<RawPost>, StorefrontApiError> {
        let url = self.endpoint(BLOGS_PATH)?;
        let posts: Vec<RawPostDto> = self.fetch_list(self.client.get(url), "blog posts").await?;
        Ok(posts.into_iter().map(RawPost::from).collect())
    }

    async fn get_post(&self, id: i64) -> Result<RawPost, StorefrontApiError> {
        let subject = format!("blog post {id}");
        let url = self.endpoint(&format!("{BLOGS_PATH}/{id}"))?;
        self.fetch_item::<RawPostDto>(self.client.get(url), &subject)
            .await?
            .map(RawPost::from)
            .ok_or_else(|| StorefrontApiError::not_found(subject))
    }

    async fn create_post(&self, post: &NewPost) -> Result<RawPost, StorefrontApiError> {
        let url = self.endpoint(BLOGS_PATH)?;
        let request = self.client.post(url).json(&NewPostBody::from(post));
        self.fetch_item::<RawPostDto>(request, "new blog post")
            .await?
            .map(RawPost::from)
            .ok_or_else(|| StorefrontApiError::decode("create response carried no post"))
    }
}

#[async_trait]
impl CommentSource for StorefrontHttpApi {
    async fn list_comments(&self, product_id: i64) -> Result<Vec<Comment>, StorefrontApiError> {
        let url = self.endpoint(COMMENTS_PATH)?;
        let request = self.client.get(url).query(&[("productId", product_id)]);
        let comments: Vec<CommentDto> = self
            .fetch_list(request, &format!("comments for product {product_id}"))
            .await?;
        Ok(comments
            .into_iter()
            .map(|comment| comment.into_domain(product_id))
            .collect())
    }

    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, StorefrontApiError> {
        let url = self.endpoint(ADD_COMMENT_PATH)?;
        let request = self.client.post(url).json(&NewCommentBody::from(comment));
        self.fetch_item::<CommentDto>(request, "new comment")
            .await?
            .map(|stored| stored.into_domain(comment.product_id))
            .ok_or_else(|| StorefrontApiError::decode("add comment response carried no comment"))
    }
}

fn with_trailing_slash(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

fn map_transport_error(error: reqwest::Error) -> StorefrontApiError {
    if error.is_timeout() {
        StorefrontApiError::timeout(error.to_string())
    } else {
        StorefrontApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8], subject: &str) -> StorefrontApiError {
    match status {
        StatusCode::NOT_FOUND => StorefrontApiError::not_found(subject),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            StorefrontApiError::timeout(format!("status {}", status.as_u16()))
        }
        _ => StorefrontApiError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
