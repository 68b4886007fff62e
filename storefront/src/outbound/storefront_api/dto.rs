//! DTOs for the marketplace API's JSON envelope and payloads.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Backend fields are frequently `null` or missing, so
//! everything except identifiers decodes leniently.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::{Comment, NewComment, NewPost, PostProduct, RawPost};

/// `{ code, message, result }` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto {
    #[serde(default)]
    pub(super) code: Option<i64>,
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) result: Value,
}

impl EnvelopeDto {
    /// Decode `result` as a list. `None` means the field was absent or not an
    /// array. Items that fail to decode are skipped and logged, so one bad
    /// record never hides the rest of the list.
    pub(super) fn into_list<T: DeserializeOwned>(self, subject: &str) -> Option<Vec<T>> {
        let Value::Array(items) = self.result else {
            return None;
        };
        let decoded = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(error) => {
                    warn!(subject, index, %error, "skipping undecodable list item");
                    None
                }
            })
            .collect();
        Some(decoded)
    }

    /// Decode `result` as a single record. `Ok(None)` means the field was
    /// absent or `null`.
    pub(super) fn into_item<T: DeserializeOwned>(self) -> Result<Option<T>, String> {
        match self.result {
            Value::Null => Ok(None),
            value => serde_json::from_value(value)
                .map(Some)
                .map_err(|error| format!("invalid result: {error}")),
        }
    }
}

pub(super) fn decode_envelope(body: &[u8]) -> Result<EnvelopeDto, String> {
    serde_json::from_slice(body).map_err(|error| format!("invalid envelope JSON: {error}"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostProductDto {
    #[serde(default)]
    image_urls: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawPostDto {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    author_username: Option<String>,
    #[serde(default)]
    products: Option<Vec<PostProductDto>>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl From<PostProductDto> for PostProduct {
    fn from(value: PostProductDto) -> Self {
        Self {
            image_urls: string_items(value.image_urls),
        }
    }
}

impl From<RawPostDto> for RawPost {
    fn from(value: RawPostDto) -> Self {
        Self {
            id: value.id,
            title: value.title.unwrap_or_default(),
            content: value.content.unwrap_or_default(),
            author_username: value.author_username.unwrap_or_default(),
            products: value
                .products
                .unwrap_or_default()
                .into_iter()
                .map(PostProduct::from)
                .collect(),
            created_at: timestamp_text(value.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CommentDto {
    id: i64,
    #[serde(default)]
    product_id: Option<i64>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl CommentDto {
    /// Map into the domain comment, filling a missing product from the
    /// request that produced it.
    pub(super) fn into_domain(self, product_id: i64) -> Comment {
        let created_at = timestamp_text(self.created_at);
        Comment {
            id: self.id,
            product_id: self.product_id.unwrap_or(product_id),
            user_id: self.user_id.unwrap_or_default(),
            username: self.username,
            content: self.content.unwrap_or_default(),
            created_at: (!created_at.is_empty()).then_some(created_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewPostBody<'a> {
    title: &'a str,
    content: &'a str,
    author_id: i64,
    product_ids: &'a [i64],
}

impl<'a> From<&'a NewPost> for NewPostBody<'a> {
    fn from(value: &'a NewPost) -> Self {
        Self {
            title: &value.title,
            content: &value.content,
            author_id: value.author_id,
            product_ids: &value.product_ids,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewCommentBody<'a> {
    product_id: i64,
    user_id: i64,
    content: &'a str,
}

impl<'a> From<&'a NewComment> for NewCommentBody<'a> {
    fn from(value: &'a NewComment) -> Self {
        Self {
            product_id: value.product_id,
            user_id: value.user_id,
            content: &value.content,
        }
    }
}

/// Keep the string entries of a JSON array. Anything else yields no entries.
fn string_items(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Render a backend timestamp as text. Strings pass through; other shapes
/// (such as date-part arrays) keep their JSON form.
fn timestamp_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for lenient envelope decoding.

    use super::*;
    use rstest::rstest;

    fn envelope(json: &str) -> EnvelopeDto {
        decode_envelope(json.as_bytes()).expect("envelope decodes")
    }

    #[rstest]
    #[case::string(r#"{"code":200,"message":"ok","result":"oops"}"#)]
    #[case::object(r#"{"code":200,"message":"ok","result":{"id":1}}"#)]
    #[case::null(r#"{"code":200,"message":"ok","result":null}"#)]
    #[case::absent(r#"{"code":200,"message":"ok"}"#)]
    fn non_array_list_results_are_reported_as_missing(#[case] json: &str) {
        let list = envelope(json).into_list::<RawPostDto>("blog posts");
        assert!(list.is_none());
    }

    #[rstest]
    fn list_items_with_nulls_decode_to_defaults() {
        let posts = envelope(
            r#"{"code":200,"message":"ok","result":[
                {"id":1,"title":null,"content":"c","authorUsername":null,
                 "products":[{"imageUrls":["a.jpg",null,"b.jpg"]},{"imageUrls":null}],
                 "createdAt":"2024-05-01T10:00:00"},
                {"id":2}
            ]}"#,
        )
        .into_list::<RawPostDto>("blog posts")
        .expect("list present");

        let posts: Vec<RawPost> = posts.into_iter().map(RawPost::from).collect();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].image_urls().collect::<Vec<_>>(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(posts[0].created_at, "2024-05-01T10:00:00");
        assert!(posts[1].products.is_empty());
    }

    #[rstest]
    #[case::string_id(r#"{"result":[{"id":1},{"id":"b7"}]}"#)]
    #[case::missing_id(r#"{"result":[{"id":1},{"title":"no id"}]}"#)]
    #[case::scalar_item(r#"{"result":[{"id":1},"oops"]}"#)]
    fn undecodable_list_items_are_skipped(#[case] json: &str) {
        let posts = envelope(json)
            .into_list::<RawPostDto>("blog posts")
            .expect("list present");
        assert_eq!(posts.len(), 1);
        assert_eq!(RawPost::from(posts.into_iter().next().expect("one post")).id, 1);
    }

    #[rstest]
    #[case::scalar(r#"{"id":1,"products":[{"imageUrls":"a.jpg"},{"imageUrls":["b.jpg",7]}]}"#)]
    fn non_array_image_lists_are_empty(#[case] json: &str) {
        let post: RawPostDto = serde_json::from_str(json).expect("decodes");
        assert_eq!(RawPost::from(post).image_urls().collect::<Vec<_>>(), vec!["b.jpg"]);
    }

    #[rstest]
    fn null_item_result_is_missing() {
        let item = envelope(r#"{"code":404,"message":"not found","result":null}"#)
            .into_item::<RawPostDto>()
            .expect("null is not an error");
        assert!(item.is_none());
    }

    #[rstest]
    fn array_timestamps_keep_their_json_form() {
        let post: RawPostDto =
            serde_json::from_str(r#"{"id":3,"createdAt":[2024,5,1,10,0]}"#).expect("decodes");
        assert_eq!(RawPost::from(post).created_at, "[2024,5,1,10,0]");
    }

    #[rstest]
    fn comments_fall_back_to_the_requested_product() {
        let dto: CommentDto =
            serde_json::from_str(r#"{"id":4,"userId":2,"content":"Nice"}"#).expect("decodes");
        let comment = dto.into_domain(17);
        assert_eq!(comment.product_id, 17);
        assert_eq!(comment.created_at, None);
    }

    #[rstest]
    fn request_bodies_use_camel_case() {
        let post = NewPost {
            title: "t".to_owned(),
            content: "c".to_owned(),
            author_id: 1,
            product_ids: vec![2, 3],
        };
        let value = serde_json::to_value(NewPostBody::from(&post)).expect("serialise body");
        assert_eq!(
            value,
            serde_json::json!({"title": "t", "content": "c", "authorId": 1, "productIds": [2, 3]})
        );
    }

    #[rstest]
    fn envelope_requires_json() {
        assert!(decode_envelope(b"<html>").is_err());
    }
}
