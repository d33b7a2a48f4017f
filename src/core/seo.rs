use crate::core::matcher::CatalogMatcher;
use crate::domain::model::ProductMatch;
use crate::domain::ports::{CatalogSource, SiteProvider};
use serde::Serialize;
use serde_json::{json, Value};

pub const NOT_FOUND_TITLE: &str = "Product Not Found";

/// `<head>` metadata for one product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_images: Vec<String>,
}

impl PageMetadata {
    pub fn for_product<S: SiteProvider>(product: &ProductMatch, site: &S) -> Self {
        let og_title = format!(
            "Best {} Soap for {}",
            product.ingredient.name, product.benefit.name
        );

        Self {
            title: format!("{} | {}", og_title, site.brand()),
            description: product.product_description.clone(),
            og_title,
            og_description: product.product_description.clone(),
            og_images: vec![product.image_url.clone()],
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            description: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_images: Vec::new(),
        }
    }
}

/// Metadata for the page at `/shop/{ingredient}/{benefit}`; unknown pairs get
/// the "not found" title.
pub fn page_metadata<C: CatalogSource, S: SiteProvider>(
    matcher: &CatalogMatcher<C>,
    ingredient_slug: &str,
    benefit_slug: &str,
    site: &S,
) -> PageMetadata {
    match matcher.resolve_match(ingredient_slug, benefit_slug) {
        Some(product) => PageMetadata::for_product(&product, site),
        None => PageMetadata::not_found(),
    }
}

/// schema.org `Product` structured data for a product page.
pub fn product_json_ld<S: SiteProvider>(product: &ProductMatch, site: &S) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.product_name,
        "description": product.product_description,
        "image": product.image_url,
        "brand": {
            "@type": "Brand",
            "name": site.brand(),
        },
        "offers": {
            "@type": "Offer",
            "price": product.price_amount(),
            "priceCurrency": site.price_currency(),
            "availability": "https://schema.org/InStock",
            "url": site.offer_url(),
        }
    })
}
