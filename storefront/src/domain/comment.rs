//! Product comments and the per-product comment thread.

use serde::{Deserialize, Serialize};

use super::Error;
use super::ports::ProductComments;

/// Comment left on a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload submitted when a user comments on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub product_id: i64,
    pub user_id: i64,
    pub content: String,
}

/// Comments shown beneath one product.
///
/// The thread only changes after a network call succeeds: `refresh` replaces
/// the list wholesale and `submit` appends the comment the backend stored.
/// A failed call leaves the previous list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    product_id: i64,
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Start an empty thread for `product_id`.
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            comments: Vec::new(),
        }
    }

    /// Product the thread belongs to.
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Comments currently shown.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Reload the thread from the backend.
    pub async fn refresh<P>(&mut self, port: &P) -> Result<(), Error>
    where
        P: ProductComments + ?Sized,
    {
        self.comments = port.list_comments(self.product_id).await?;
        Ok(())
    }

    /// Post a comment and append it once the backend accepts it.
    ///
    /// Blank content is rejected without contacting the backend.
    pub async fn submit<P>(&mut self, port: &P, user_id: i64, content: &str) -> Result<Comment, Error>
    where
        P: ProductComments + ?Sized,
    {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::invalid_request("comment must not be empty"));
        }

        let stored = port
            .add_comment(NewComment {
                product_id: self.product_id,
                user_id,
                content: content.to_owned(),
            })
            .await?;
        self.comments.push(stored.clone());
        Ok(stored)
    }
}
