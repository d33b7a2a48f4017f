pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use crate::config::SiteConfig;
pub use crate::core::engine::CatalogEngine;
pub use crate::core::matcher::{list_all_paths, resolve_match, static_matcher, CatalogMatcher};
pub use domain::data::{StaticCatalog, BENEFITS, INGREDIENTS};
pub use domain::model::{Benefit, Ingredient, ProductMatch, ProductPath, PRODUCT_PRICE};
pub use utils::error::{CatalogError, Result};
