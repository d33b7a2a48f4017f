use crate::domain::model::{ProductMatch, ProductPath};
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProductRow<'a> {
    ingredient: &'a str,
    benefit: &'a str,
    product_name: &'a str,
    price: &'a str,
    image_url: &'a str,
    route: String,
}

/// One CSV row per product, header included.
pub fn export_products_csv(matches: &[ProductMatch]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for product in matches {
        writer.serialize(ProductRow {
            ingredient: product.ingredient.slug,
            benefit: product.benefit.slug,
            product_name: &product.product_name,
            price: &product.price,
            image_url: &product.image_url,
            route: product.path().route(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| CatalogError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// `[{"ingredient": ..., "benefit": ...}, ...]`
pub fn export_paths_json(paths: &[ProductPath]) -> Result<String> {
    Ok(serde_json::to_string_pretty(paths)?)
}
