use crate::domain::data::StaticCatalog;
use crate::domain::model::{Benefit, Ingredient, ProductMatch, ProductPath};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Joins ingredients and benefits into products.
///
/// Both lists are indexed by slug when the matcher is built, so lookups do not
/// scan the tables. The matcher holds no mutable state and can be shared across
/// threads freely.
#[derive(Debug)]
pub struct CatalogMatcher<C: CatalogSource = StaticCatalog> {
    source: C,
    ingredient_index: HashMap<&'static str, usize>,
    benefit_index: HashMap<&'static str, usize>,
}

impl<C: CatalogSource> CatalogMatcher<C> {
    /// Fails with [`CatalogError::DuplicateSlug`] when a list repeats a slug.
    pub fn new(source: C) -> Result<Self> {
        let ingredient_index = index_slugs("ingredient", source.ingredients().iter().map(|i| i.slug))?;
        let benefit_index = index_slugs("benefit", source.benefits().iter().map(|b| b.slug))?;

        tracing::debug!(
            "Catalog indexed: {} ingredients, {} benefits",
            ingredient_index.len(),
            benefit_index.len()
        );

        Ok(Self {
            source,
            ingredient_index,
            benefit_index,
        })
    }

    pub fn find_ingredient(&self, slug: &str) -> Option<&Ingredient> {
        self.ingredient_index
            .get(slug)
            .map(|&idx| &self.source.ingredients()[idx])
    }

    pub fn find_benefit(&self, slug: &str) -> Option<&Benefit> {
        self.benefit_index
            .get(slug)
            .map(|&idx| &self.source.benefits()[idx])
    }

    /// Exact, case-sensitive lookup of both slugs. `None` means "not found".
    pub fn resolve_match(&self, ingredient_slug: &str, benefit_slug: &str) -> Option<ProductMatch> {
        let ingredient = self.find_ingredient(ingredient_slug)?;
        let benefit = self.find_benefit(benefit_slug)?;
        Some(ProductMatch::new(*ingredient, *benefit))
    }

    /// Same lookup as [`resolve_match`](Self::resolve_match), but the error
    /// names whichever slug(s) failed to resolve.
    pub fn try_resolve_match(&self, ingredient_slug: &str, benefit_slug: &str) -> Result<ProductMatch> {
        match (self.find_ingredient(ingredient_slug), self.find_benefit(benefit_slug)) {
            (Some(ingredient), Some(benefit)) => Ok(ProductMatch::new(*ingredient, *benefit)),
            (ingredient, benefit) => {
                tracing::debug!(
                    "Unresolved slug pair: ingredient={} benefit={}",
                    ingredient_slug,
                    benefit_slug
                );
                Err(CatalogError::UnresolvedSlugPair {
                    ingredient: ingredient.is_none().then(|| ingredient_slug.to_string()),
                    benefit: benefit.is_none().then(|| benefit_slug.to_string()),
                })
            }
        }
    }

    /// Full cross product, ingredient-major: every benefit (in declared order)
    /// for the first ingredient, then every benefit for the second, and so on.
    /// The order is stable across calls.
    pub fn list_all_paths(&self) -> Vec<ProductPath> {
        let benefits = self.source.benefits();
        let mut paths = Vec::with_capacity(self.product_count());

        for ingredient in self.source.ingredients() {
            for benefit in benefits {
                paths.push(ProductPath {
                    ingredient: ingredient.slug,
                    benefit: benefit.slug,
                });
            }
        }

        paths
    }

    /// Every product, in [`list_all_paths`](Self::list_all_paths) order.
    pub fn all_matches(&self) -> Vec<ProductMatch> {
        let benefits = self.source.benefits();
        self.source
            .ingredients()
            .iter()
            .flat_map(|ingredient| benefits.iter().map(|benefit| ProductMatch::new(*ingredient, *benefit)))
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.source.ingredients().len() * self.source.benefits().len()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.source.ingredients()
    }

    pub fn benefits(&self) -> &[Benefit] {
        self.source.benefits()
    }
}

fn index_slugs(
    kind: &'static str,
    slugs: impl Iterator<Item = &'static str>,
) -> Result<HashMap<&'static str, usize>> {
    let mut index = HashMap::new();
    for (idx, slug) in slugs.enumerate() {
        if index.insert(slug, idx).is_some() {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(index)
}

static STATIC_MATCHER: OnceLock<CatalogMatcher<StaticCatalog>> = OnceLock::new();

/// Matcher over the compiled-in catalog, built on first use.
pub fn static_matcher() -> &'static CatalogMatcher<StaticCatalog> {
    STATIC_MATCHER.get_or_init(|| {
        CatalogMatcher::new(StaticCatalog).expect("compiled-in catalog has duplicate slugs")
    })
}

pub fn resolve_match(ingredient_slug: &str, benefit_slug: &str) -> Option<ProductMatch> {
    static_matcher().resolve_match(ingredient_slug, benefit_slug)
}

pub fn list_all_paths() -> Vec<ProductPath> {
    static_matcher().list_all_paths()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TinyCatalog {
        ingredients: Vec<Ingredient>,
        benefits: Vec<Benefit>,
    }

    impl CatalogSource for TinyCatalog {
        fn ingredients(&self) -> &[Ingredient] {
            &self.ingredients
        }

        fn benefits(&self) -> &[Benefit] {
            &self.benefits
        }
    }

    fn ingredient(slug: &'static str) -> Ingredient {
        Ingredient {
            id: slug,
            name: "Test",
            slug,
            description: "Test ingredient",
            image_url: "https://example.com/test.jpg",
        }
    }

    fn benefit(slug: &'static str) -> Benefit {
        Benefit {
            id: slug,
            name: "Test",
            slug,
            description: "Test benefit",
        }
    }

    #[test]
    fn test_duplicate_ingredient_slug_is_rejected() {
        let source = TinyCatalog {
            ingredients: vec![ingredient("honey"), ingredient("honey")],
            benefits: vec![benefit("dry-skin")],
        };

        match CatalogMatcher::new(source) {
            Err(CatalogError::DuplicateSlug { kind, slug }) => {
                assert_eq!(kind, "ingredient");
                assert_eq!(slug, "honey");
            }
            other => panic!("expected duplicate slug error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_duplicate_benefit_slug_is_rejected() {
        let source = TinyCatalog {
            ingredients: vec![ingredient("honey")],
            benefits: vec![benefit("dry-skin"), benefit("dry-skin")],
        };
        assert!(CatalogMatcher::new(source).is_err());
    }

    #[test]
    fn test_custom_source_cross_product() {
        let source = TinyCatalog {
            ingredients: vec![ingredient("a"), ingredient("b")],
            benefits: vec![benefit("x"), benefit("y"), benefit("z")],
        };
        let matcher = CatalogMatcher::new(source).unwrap();

        let routes: Vec<String> = matcher.list_all_paths().iter().map(|p| p.route()).collect();
        assert_eq!(
            routes,
            vec!["/shop/a/x", "/shop/a/y", "/shop/a/z", "/shop/b/x", "/shop/b/y", "/shop/b/z"]
        );
        assert_eq!(matcher.product_count(), 6);
    }

    #[test]
    fn test_empty_benefit_list_yields_no_paths() {
        let source = TinyCatalog {
            ingredients: vec![ingredient("a")],
            benefits: vec![],
        };
        let matcher = CatalogMatcher::new(source).unwrap();
        assert!(matcher.list_all_paths().is_empty());
        assert!(matcher.resolve_match("a", "x").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(resolve_match("Shea-Butter", "dry-skin").is_none());
        assert!(resolve_match("shea-butter", "DRY-SKIN").is_none());
        assert!(resolve_match(" shea-butter", "dry-skin").is_none());
    }

    #[test]
    fn test_lookup_ignores_ids() {
        assert!(resolve_match("1", "1").is_none());
    }

    #[test]
    fn test_try_resolve_reports_failed_slugs() {
        let matcher = static_matcher();

        match matcher.try_resolve_match("nonexistent", "dry-skin") {
            Err(CatalogError::UnresolvedSlugPair { ingredient, benefit }) => {
                assert_eq!(ingredient.as_deref(), Some("nonexistent"));
                assert_eq!(benefit, None);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match matcher.try_resolve_match("honey", "oily") {
            Err(CatalogError::UnresolvedSlugPair { ingredient, benefit }) => {
                assert_eq!(ingredient, None);
                assert_eq!(benefit.as_deref(), Some("oily"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match matcher.try_resolve_match("", "") {
            Err(CatalogError::UnresolvedSlugPair { ingredient, benefit }) => {
                assert_eq!(ingredient.as_deref(), Some(""));
                assert_eq!(benefit.as_deref(), Some(""));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_all_matches_follow_path_order() {
        let matcher = static_matcher();
        let paths = matcher.list_all_paths();
        let matches = matcher.all_matches();

        assert_eq!(matches.len(), paths.len());
        for (product, path) in matches.iter().zip(paths.iter()) {
            assert_eq!(product.path(), *path);
        }
    }
}
