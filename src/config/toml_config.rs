use crate::domain::model::ChangeFrequency;
use crate::domain::ports::SiteProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "https://cindys-bliss-seo.vercel.app";
pub const DEFAULT_BRAND: &str = "Cindy's Bliss";
pub const DEFAULT_OFFER_URL: &str = "https://cindysbliss.com";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub sitemap: SitemapSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub base_url: String,
    pub brand: String,
    pub offer_url: String,
    pub price_currency: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            offer_url: DEFAULT_OFFER_URL.to_string(),
            price_currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    pub home_change_frequency: ChangeFrequency,
    pub home_priority: f64,
    pub product_change_frequency: ChangeFrequency,
    pub product_priority: f64,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            home_change_frequency: ChangeFrequency::Daily,
            home_priority: 1.0,
            product_change_frequency: ChangeFrequency::Weekly,
            product_priority: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file: {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("site.base_url", &self.site.base_url)?;
        validate_url("site.offer_url", &self.site.offer_url)?;
        validate_non_empty_string("site.brand", &self.site.brand)?;
        validate_non_empty_string("site.price_currency", &self.site.price_currency)?;
        validate_range("sitemap.home_priority", self.sitemap.home_priority, 0.0, 1.0)?;
        validate_range("sitemap.product_priority", self.sitemap.product_priority, 0.0, 1.0)?;
        validate_path("output.path", &self.output.path)?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${SITE_URL})；未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl SiteProvider for SiteConfig {
    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn brand(&self) -> &str {
        &self.site.brand
    }

    fn offer_url(&self) -> &str {
        &self.site.offer_url
    }

    fn price_currency(&self) -> &str {
        &self.site.price_currency
    }

    fn home_change_frequency(&self) -> ChangeFrequency {
        self.sitemap.home_change_frequency
    }

    fn home_priority(&self) -> f64 {
        self.sitemap.home_priority
    }

    fn product_change_frequency(&self) -> ChangeFrequency {
        self.sitemap.product_change_frequency
    }

    fn product_priority(&self) -> f64 {
        self.sitemap.product_priority
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.brand(), "Cindy's Bliss");
        assert_eq!(config.price_currency(), "USD");
        assert_eq!(config.home_change_frequency(), ChangeFrequency::Daily);
        assert_eq!(config.product_priority(), 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[site]
base_url = "https://staging.example.com"

[sitemap]
product_change_frequency = "monthly"
product_priority = 0.5
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.base_url, "https://staging.example.com");
        assert_eq!(config.site.brand, DEFAULT_BRAND);
        assert_eq!(config.sitemap.product_change_frequency, ChangeFrequency::Monthly);
        assert_eq!(config.sitemap.product_priority, 0.5);
        assert_eq!(config.sitemap.home_priority, 1.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOAP_CATALOG_TEST_BASE_URL", "https://env.example.com");

        let toml_content = r#"
[site]
base_url = "${SOAP_CATALOG_TEST_BASE_URL}"
offer_url = "${SOAP_CATALOG_TEST_UNSET_VAR}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.base_url, "https://env.example.com");
        assert_eq!(config.site.offer_url, "${SOAP_CATALOG_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());

        std::env::remove_var("SOAP_CATALOG_TEST_BASE_URL");
    }

    #[test]
    fn test_unknown_change_frequency_fails_to_parse() {
        let result = SiteConfig::from_toml_str("[sitemap]\nhome_change_frequency = \"sometimes\"\n");
        assert!(matches!(
            result,
            Err(CatalogError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = SiteConfig::default();
        config.sitemap.product_priority = 1.2;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.site.brand = "   ".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.output.path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nbrand = \"File Brand\"\n\n[output]\npath = \"./dist\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.brand, "File Brand");
        assert_eq!(config.output_path(), "./dist");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SiteConfig::from_file("/nonexistent/soap-catalog.toml");
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }
}
