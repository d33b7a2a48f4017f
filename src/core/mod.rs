pub mod engine;
pub mod export;
pub mod matcher;
pub mod seo;
pub mod sitemap;

pub use crate::domain::model::{Benefit, Ingredient, ProductMatch, ProductPath};
pub use crate::domain::ports::{ArtifactStorage, CatalogSource, SiteProvider};
pub use crate::utils::error::Result;
