//! Category cards derived from the product catalogue.
//!
//! The storefront home page shows one card per product category. Categories
//! are not a first-class API resource; they are aggregated from products by
//! slugging each product's category name.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::slug::{is_valid_slug, slugify};

/// Product listing, reduced to the fields category aggregation needs.
///
/// Missing or `null` fields decode to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub category_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Category name with surrounding whitespace removed, when present and
    /// non-blank.
    pub fn category(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Home page card linking to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCard {
    /// Category name as the first matching product spelled it.
    pub title: String,
    /// Thumbnail taken from the first matching product with images.
    pub image: String,
    /// Normalised slug identifying the category.
    pub link: String,
}

impl CategoryCard {
    /// Storefront route for this category.
    pub fn path(&self) -> String {
        category_path(&self.link)
    }
}

/// Storefront route for the category with `slug`.
///
/// # Examples
/// ```
/// assert_eq!(storefront::domain::category_path("shoes-and-bags"), "/category/shoes-and-bags");
/// ```
pub fn category_path(slug: &str) -> String {
    format!("/category/{slug}")
}

/// Aggregate products into category cards.
///
/// Only active products with a non-blank category name take part. Products
/// whose name slugs to nothing, or that carry no images, never provide a
/// thumbnail. Each slug appears once, in order of first appearance among the
/// thumbnail-providing products; the first product to provide a slug keeps
/// its thumbnail and later ones are ignored. The title comes from the first
/// participating product with the same slug, exactly as that product spells
/// it; surrounding whitespace only matters for filtering and slugging.
pub fn build_category_cards(products: &[Product]) -> Vec<CategoryCard> {
    let categorised: Vec<(&Product, &str, String)> = products
        .iter()
        .filter(|product| product.is_active)
        .filter_map(|product| {
            let trimmed = product.category()?;
            let title = product.category_name.as_deref().unwrap_or(trimmed);
            Some((product, title, slugify(trimmed)))
        })
        .collect();

    let mut titles: HashMap<&str, &str> = HashMap::new();
    for (_, name, slug) in &categorised {
        titles.entry(slug.as_str()).or_insert(*name);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut cards = Vec::new();
    for (product, name, slug) in &categorised {
        if !is_valid_slug(slug) {
            continue;
        }
        let Some(image) = product.image_urls.first() else {
            continue;
        };
        if !seen.insert(slug.as_str()) {
            continue;
        }
        let title = titles.get(slug.as_str()).copied().unwrap_or(*name);
        cards.push(CategoryCard {
            title: title.to_owned(),
            image: image.clone(),
            link: slug.clone(),
        });
    }
    cards
}

#[cfg(test)]
mod tests {
    //! Regression coverage for category aggregation.

    use super::*;
    use rstest::rstest;

    fn product(id: i64, category: Option<&str>, active: bool, images: &[&str]) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            category_name: category.map(str::to_owned),
            is_active: active,
            image_urls: images.iter().map(|url| (*url).to_owned()).collect(),
        }
    }

    fn links(cards: &[CategoryCard]) -> Vec<&str> {
        cards.iter().map(|card| card.link.as_str()).collect()
    }

    #[rstest]
    fn one_card_per_slug_in_first_appearance_order() {
        let products = vec![
            product(1, Some("Shoes & Bags"), true, &["shoes-1.jpg"]),
            product(2, Some("Dresses"), true, &["dress-1.jpg"]),
            product(3, Some("shoes and bags"), true, &["shoes-2.jpg"]),
            product(4, Some("Knitwear"), true, &["knit-1.jpg"]),
        ];

        let cards = build_category_cards(&products);
        assert_eq!(links(&cards), vec!["shoes-and-bags", "dresses", "knitwear"]);
        assert_eq!(cards[0].image, "shoes-1.jpg");
        assert_eq!(cards[0].title, "Shoes & Bags");
    }

    #[rstest]
    fn inactive_and_uncategorised_products_are_ignored() {
        let products = vec![
            product(1, Some("Coats"), false, &["coat.jpg"]),
            product(2, None, true, &["none.jpg"]),
            product(3, Some("   "), true, &["blank.jpg"]),
            product(4, Some("Coats"), true, &["coat-active.jpg"]),
        ];

        let cards = build_category_cards(&products);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].image, "coat-active.jpg");
    }

    #[rstest]
    fn products_without_images_do_not_provide_thumbnails() {
        let products = vec![
            product(1, Some("Denim"), true, &[]),
            product(2, Some("DENIM"), true, &["denim.jpg"]),
        ];

        let cards = build_category_cards(&products);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].image, "denim.jpg");
        assert_eq!(cards[0].title, "Denim", "title comes from the first match");
    }

    #[rstest]
    fn names_that_slug_to_nothing_are_skipped() {
        let products = vec![product(1, Some("!!!"), true, &["x.jpg"])];
        assert!(build_category_cards(&products).is_empty());
    }

    #[rstest]
    fn titles_keep_the_original_category_name() {
        let products = vec![product(1, Some("  Vintage Tees "), true, &["tee.jpg"])];
        let cards = build_category_cards(&products);
        assert_eq!(cards[0].title, "  Vintage Tees ");
        assert_eq!(cards[0].path(), "/category/vintage-tees");
    }

    #[rstest]
    fn tight_ampersands_do_not_merge_with_spelled_out_names() {
        let products = vec![
            product(1, Some("Shoes&Bags"), true, &["tight.jpg"]),
            product(2, Some("Shoes and Bags"), true, &["spaced.jpg"]),
        ];
        let cards = build_category_cards(&products);
        assert_eq!(links(&cards), vec!["shoes-bags", "shoes-and-bags"]);
    }

    #[rstest]
    fn card_links_are_valid_slugs() {
        let products = vec![
            product(1, Some("R&D Lab"), true, &["a.jpg"]),
            product(2, Some("  -- Kids' Wear --"), true, &["b.jpg"]),
        ];
        let cards = build_category_cards(&products);
        assert_eq!(links(&cards), vec!["r-d-lab", "kids-wear"]);
        assert!(cards.iter().all(|card| is_valid_slug(&card.link)));
    }

    #[rstest]
    fn empty_catalogue_yields_no_cards() {
        assert!(build_category_cards(&[]).is_empty());
    }

    #[rstest]
    fn decodes_products_with_missing_and_null_fields() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "categoryName": "Hats", "isActive": true, "imageUrls": ["hat.jpg"]},
                {"id": 2, "name": null, "categoryName": null, "isActive": null, "imageUrls": null},
                {"id": 3}
            ]"#,
        )
        .expect("products decode");

        assert_eq!(products.len(), 3);
        assert!(products[1].image_urls.is_empty());
        assert!(!products[2].is_active);
        assert_eq!(links(&build_category_cards(&products)), vec!["hats"]);
    }
}
