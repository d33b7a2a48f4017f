use crate::domain::model::{Benefit, ChangeFrequency, Ingredient};
use crate::utils::error::Result;

/// Source of the two reference lists. Declared order is the enumeration order.
pub trait CatalogSource: Send + Sync {
    fn ingredients(&self) -> &[Ingredient];
    fn benefits(&self) -> &[Benefit];
}

/// Site-wide settings consumed by page metadata, structured data and the sitemap.
pub trait SiteProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn brand(&self) -> &str;
    fn offer_url(&self) -> &str;
    fn price_currency(&self) -> &str;
    fn home_change_frequency(&self) -> ChangeFrequency;
    fn home_priority(&self) -> f64;
    fn product_change_frequency(&self) -> ChangeFrequency;
    fn product_priority(&self) -> f64;
}

/// Destination for generated artifacts (sitemap.xml, products.csv, ...).
pub trait ArtifactStorage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Full location of `path` for log and console messages.
    fn location(&self, path: &str) -> String;
}
