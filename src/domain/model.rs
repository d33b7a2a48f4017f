use serde::{Deserialize, Serialize};
use std::fmt;

/// Every soap sells at the same price regardless of ingredient or benefit.
pub const PRODUCT_PRICE: &str = "$12.99";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMatch {
    pub ingredient: Ingredient,
    pub benefit: Benefit,
    pub product_name: String,
    pub product_description: String,
    pub price: String,
    pub image_url: String,
}

impl ProductMatch {
    pub fn new(ingredient: Ingredient, benefit: Benefit) -> Self {
        Self {
            ingredient,
            benefit,
            product_name: format!("{} Soap for {}", ingredient.name, benefit.name),
            product_description: format!(
                "Our handcrafted {} soap is specially formulated to address {}. {}. Perfect for {}.",
                ingredient.name,
                benefit.name.to_lowercase(),
                ingredient.description,
                benefit.description.to_lowercase()
            ),
            price: PRODUCT_PRICE.to_string(),
            image_url: ingredient.image_url.to_string(),
        }
    }

    pub fn path(&self) -> ProductPath {
        ProductPath {
            ingredient: self.ingredient.slug,
            benefit: self.benefit.slug,
        }
    }

    /// Price without the currency symbol, e.g. `"12.99"`.
    pub fn price_amount(&self) -> &str {
        self.price.trim_start_matches('$')
    }
}

/// One (ingredient, benefit) slug pair, i.e. one product route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProductPath {
    pub ingredient: &'static str,
    pub benefit: &'static str,
}

impl ProductPath {
    pub fn route(&self) -> String {
        format!("/shop/{}/{}", self.ingredient, self.benefit)
    }
}

/// sitemaps.org `changefreq` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
