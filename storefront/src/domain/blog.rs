//! Blog post read models and their projections.
//!
//! [`RawPost`] mirrors what the marketplace API returns. The projections in
//! this module turn it into the two view models presentation code consumes:
//! [`PostSummary`] for list cards and [`PostDetail`] for the article page.
//! Both are rebuilt from scratch on every fetch and never mutated.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a list excerpt.
pub const EXCERPT_CHAR_LIMIT: usize = 200;

/// Marker appended to an excerpt that was truncated.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Number of thumbnails shown on a list card.
pub const SUMMARY_IMAGE_COUNT: usize = 3;

/// Product attached to a blog post, reduced to the fields projections use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostProduct {
    pub image_urls: Vec<String>,
}

/// Blog post as delivered by the marketplace API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_username: String,
    pub products: Vec<PostProduct>,
    pub created_at: String,
}

impl RawPost {
    /// Iterate over every image URL of every attached product, in product
    /// order and then URL order.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.products
            .iter()
            .flat_map(|product| product.image_urls.iter().map(String::as_str))
    }
}

/// List card for one blog post.
///
/// ## Invariants
/// - `image_urls` always holds exactly [`SUMMARY_IMAGE_COUNT`] entries.
/// - `excerpt` is at most [`EXCERPT_CHAR_LIMIT`] characters plus
///   [`EXCERPT_ELLIPSIS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub image_urls: [String; SUMMARY_IMAGE_COUNT],
}

/// Full article view for one blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_username: String,
    pub image_urls: Vec<String>,
    pub created_at: String,
}

/// Payload submitted when an author publishes a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub product_ids: Vec<i64>,
}

/// Shorten `content` for a list card.
///
/// Content of up to [`EXCERPT_CHAR_LIMIT`] characters is returned unchanged.
/// Longer content is cut after that many Unicode scalar values, ignoring word
/// boundaries, and [`EXCERPT_ELLIPSIS`] is appended.
///
/// # Examples
/// ```
/// use storefront::domain::excerpt;
///
/// assert_eq!(excerpt("short"), "short");
/// assert_eq!(excerpt(&"é".repeat(201)), format!("{}...", "é".repeat(200)));
/// ```
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHAR_LIMIT) {
        None => content.to_owned(),
        Some((cut, _)) => {
            let head = content.get(..cut).unwrap_or(content);
            format!("{head}{EXCERPT_ELLIPSIS}")
        }
    }
}

/// Pick exactly [`SUMMARY_IMAGE_COUNT`] thumbnails from a flattened list.
///
/// The first three URLs are kept in order. Shorter lists are padded by
/// repeating the first URL, or the empty string when there is none.
pub fn summary_images<'a>(
    urls: impl IntoIterator<Item = &'a str>,
) -> [String; SUMMARY_IMAGE_COUNT] {
    let picked: Vec<&str> = urls.into_iter().take(SUMMARY_IMAGE_COUNT).collect();
    let filler = picked.first().copied().unwrap_or_default();
    std::array::from_fn(|slot| picked.get(slot).copied().unwrap_or(filler).to_owned())
}

/// Project one post into its list card.
pub fn project_summary(post: &RawPost) -> PostSummary {
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        excerpt: excerpt(&post.content),
        image_urls: summary_images(post.image_urls()),
    }
}

/// Project posts into list cards, preserving the order the API returned.
pub fn project_summaries(posts: &[RawPost]) -> Vec<PostSummary> {
    posts.iter().map(project_summary).collect()
}

/// Project one post into its detail view.
///
/// Every image URL is kept, including duplicates across products.
pub fn project_detail(post: RawPost) -> PostDetail {
    let image_urls = post.image_urls().map(str::to_owned).collect();
    PostDetail {
        id: post.id,
        title: post.title,
        content: post.content,
        author_username: post.author_username,
        image_urls,
        created_at: post.created_at,
    }
}

#[cfg(test)]
#[path = "blog_tests.rs"]
mod tests;
