//! Tests for blog post projections.

use super::*;
use rstest::{fixture, rstest};

fn product(urls: &[&str]) -> PostProduct {
    PostProduct {
        image_urls: urls.iter().map(|url| (*url).to_owned()).collect(),
    }
}

#[fixture]
fn post() -> RawPost {
    RawPost {
        id: 7,
        title: "Autumn layering".to_owned(),
        content: "Wool over linen.".to_owned(),
        author_username: "mira".to_owned(),
        products: vec![product(&["a.jpg", "b.jpg"]), product(&["c.jpg", "d.jpg"])],
        created_at: "2024-10-01T09:30:00".to_owned(),
    }
}

#[rstest]
fn summary_keeps_first_three_images_in_product_order(post: RawPost) {
    let summary = project_summary(&post);
    assert_eq!(summary.image_urls, ["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(summary.id, 7);
    assert_eq!(summary.title, "Autumn layering");
    assert_eq!(summary.excerpt, "Wool over linen.");
}

#[rstest]
#[case::none(vec![], ["", "", ""])]
#[case::one_product_no_urls(vec![product(&[])], ["", "", ""])]
#[case::single(vec![product(&["a.jpg"])], ["a.jpg", "a.jpg", "a.jpg"])]
#[case::two(vec![product(&["a.jpg"]), product(&["b.jpg"])], ["a.jpg", "b.jpg", "a.jpg"])]
#[case::empty_product_first(vec![product(&[]), product(&["z.jpg"])], ["z.jpg", "z.jpg", "z.jpg"])]
fn summary_pads_short_image_lists(
    mut post: RawPost,
    #[case] products: Vec<PostProduct>,
    #[case] expected: [&str; 3],
) {
    post.products = products;
    let summary = project_summary(&post);
    assert_eq!(summary.image_urls, expected);
}

#[rstest]
fn excerpt_keeps_content_at_the_limit() {
    let content = "x".repeat(EXCERPT_CHAR_LIMIT);
    assert_eq!(excerpt(&content), content);
}

#[rstest]
fn excerpt_truncates_past_the_limit_without_word_boundaries() {
    let content = format!("{} tail", "word ".repeat(50));
    let expected = format!("{}...", "word ".repeat(40));
    assert_eq!(excerpt(&content), expected);
}

#[rstest]
fn excerpt_counts_characters_not_bytes() {
    let content = "ü".repeat(EXCERPT_CHAR_LIMIT + 5);
    let truncated = excerpt(&content);
    assert_eq!(
        truncated.chars().count(),
        EXCERPT_CHAR_LIMIT + EXCERPT_ELLIPSIS.len()
    );
    assert!(truncated.ends_with(EXCERPT_ELLIPSIS));
    assert!(truncated.starts_with(&"ü".repeat(EXCERPT_CHAR_LIMIT)));
}

#[rstest]
fn excerpt_keeps_multibyte_content_at_the_limit() {
    let content = "🧥".repeat(EXCERPT_CHAR_LIMIT);
    assert_eq!(excerpt(&content), content);
}

#[rstest]
fn summaries_preserve_backend_order(post: RawPost) {
    let mut second = post.clone();
    second.id = 3;
    let summaries = project_summaries(&[post, second]);
    let ids: Vec<i64> = summaries.iter().map(|summary| summary.id).collect();
    assert_eq!(ids, vec![7, 3]);
}

#[rstest]
fn summaries_of_nothing_are_empty() {
    assert!(project_summaries(&[]).is_empty());
}

#[rstest]
fn detail_keeps_every_image_including_duplicates(mut post: RawPost) {
    post.products.push(product(&["a.jpg", "e.jpg"]));
    let detail = project_detail(post);
    assert_eq!(
        detail.image_urls,
        vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg", "a.jpg", "e.jpg"]
    );
    assert_eq!(detail.author_username, "mira");
    assert_eq!(detail.created_at, "2024-10-01T09:30:00");
    assert_eq!(detail.content, "Wool over linen.");
}

#[rstest]
fn detail_without_products_has_no_images(mut post: RawPost) {
    post.products.clear();
    assert!(project_detail(post).image_urls.is_empty());
}

#[rstest]
fn summary_serialises_in_camel_case(post: RawPost) {
    let value = serde_json::to_value(project_summary(&post)).expect("serialise summary");
    assert_eq!(
        value,
        serde_json::json!({
            "id": 7,
            "title": "Autumn layering",
            "excerpt": "Wool over linen.",
            "imageUrls": ["a.jpg", "b.jpg", "c.jpg"],
        })
    );
}
