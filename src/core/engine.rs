use crate::core::export::{export_paths_json, export_products_csv};
use crate::core::matcher::CatalogMatcher;
use crate::core::seo::{product_json_ld, PageMetadata};
use crate::core::sitemap::{build_sitemap, render_xml};
use crate::domain::data::StaticCatalog;
use crate::domain::ports::{ArtifactStorage, CatalogSource, SiteProvider};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

pub const SITEMAP_FILENAME: &str = "sitemap.xml";
pub const PRODUCTS_FILENAME: &str = "products.csv";

/// Drives the catalog operations behind the CLI and writes build artifacts.
pub struct CatalogEngine<'a, S: ArtifactStorage, P: SiteProvider, C: CatalogSource = StaticCatalog> {
    matcher: &'a CatalogMatcher<C>,
    site: P,
    storage: S,
}

impl<'a, S: ArtifactStorage, P: SiteProvider, C: CatalogSource> CatalogEngine<'a, S, P, C> {
    pub fn new(matcher: &'a CatalogMatcher<C>, site: P, storage: S) -> Self {
        Self {
            matcher,
            site,
            storage,
        }
    }

    /// Product JSON, optionally with page metadata and structured data.
    pub fn resolve(
        &self,
        ingredient_slug: &str,
        benefit_slug: &str,
        with_metadata: bool,
        with_json_ld: bool,
    ) -> Result<Value> {
        let product = self.matcher.try_resolve_match(ingredient_slug, benefit_slug)?;
        tracing::info!("Resolved product: {}", product.product_name);

        let mut output = json!({ "product": product });
        if with_metadata {
            output["metadata"] = serde_json::to_value(PageMetadata::for_product(&product, &self.site))?;
        }
        if with_json_ld {
            output["jsonLd"] = product_json_ld(&product, &self.site);
        }

        Ok(output)
    }

    pub fn paths(&self, as_json: bool) -> Result<String> {
        let paths = self.matcher.list_all_paths();
        tracing::info!("Listing {} product paths", paths.len());

        if as_json {
            return export_paths_json(&paths);
        }

        Ok(paths
            .iter()
            .map(|path| path.route())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn sitemap(&self, now: DateTime<Utc>) -> String {
        let entries = build_sitemap(&self.matcher.list_all_paths(), &self.site, now);
        tracing::info!("Generated sitemap with {} URLs", entries.len());
        render_xml(&entries)
    }

    pub fn export_csv(&self) -> Result<String> {
        let matches = self.matcher.all_matches();
        tracing::info!("Exporting {} products", matches.len());
        export_products_csv(&matches)
    }

    /// Writes `content` under the storage root and returns its full location.
    pub fn write_artifact(&self, filename: &str, content: &str) -> Result<String> {
        self.storage.write_file(filename, content.as_bytes())?;
        let location = self.storage.location(filename);
        tracing::info!("📁 Output saved to: {}", location);
        Ok(location)
    }
}
