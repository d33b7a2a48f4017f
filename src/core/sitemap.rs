use crate::domain::model::{ChangeFrequency, ProductPath};
use crate::domain::ports::SiteProvider;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// Home page first, then one entry per product path in the given order.
pub fn build_sitemap<S: SiteProvider>(
    paths: &[ProductPath],
    site: &S,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base_url = site.base_url().trim_end_matches('/');

    let mut entries = Vec::with_capacity(paths.len() + 1);
    entries.push(SitemapEntry {
        url: base_url.to_string(),
        last_modified: now,
        change_frequency: site.home_change_frequency(),
        priority: site.home_priority(),
    });

    entries.extend(paths.iter().map(|path| SitemapEntry {
        url: format!("{}{}", base_url, path.route()),
        last_modified: now,
        change_frequency: site.product_change_frequency(),
        priority: site.product_priority(),
    }));

    tracing::debug!("Built sitemap with {} entries", entries.len());
    entries
}

pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            format_priority(entry.priority)
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Shortest exact decimal form, always with a fractional part (`1.0`, `0.85`).
fn format_priority(priority: f64) -> String {
    let formatted = priority.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::SiteConfig;
    use crate::core::matcher::list_all_paths;
    use crate::utils::validation::Validate;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_home_entry_comes_first() {
        let entries = build_sitemap(&list_all_paths(), &SiteConfig::default(), fixed_now());

        assert_eq!(entries.len(), 65);
        assert_eq!(entries[0].url, "https://cindys-bliss-seo.vercel.app");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(
            entries[1].url,
            "https://cindys-bliss-seo.vercel.app/shop/shea-butter/dry-skin"
        );
        assert_eq!(entries[1].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(entries[1].priority, 0.8);
        assert_eq!(
            entries[64].url,
            "https://cindys-bliss-seo.vercel.app/shop/tea-tree-oil/skin-brightening"
        );
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();

        let entries = build_sitemap(&list_all_paths()[..1], &config, fixed_now());
        assert_eq!(entries[0].url, "https://example.com");
        assert_eq!(entries[1].url, "https://example.com/shop/shea-butter/dry-skin");
    }

    #[test]
    fn test_render_xml() {
        let entries = build_sitemap(&list_all_paths()[..1], &SiteConfig::default(), fixed_now());
        let xml = render_xml(&entries);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains(
            "<loc>https://cindys-bliss-seo.vercel.app/shop/shea-butter/dry-skin</loc>"
        ));
        assert!(xml.contains("<lastmod>2024-05-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_xml_keeps_priority_precision() {
        let config = SiteConfig::from_toml_str(
            "[sitemap]\nproduct_priority = 0.85\nhome_priority = 0.05\n",
        )
        .unwrap();
        config.validate().unwrap();

        let entries = build_sitemap(&list_all_paths()[..1], &config, fixed_now());
        let xml = render_xml(&entries);

        assert!(xml.contains("<priority>0.85</priority>"));
        assert!(xml.contains("<priority>0.05</priority>"));
        assert!(!xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("<priority>0.1</priority>"));
    }

    #[test]
    fn test_format_priority() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.0), "0.0");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(0.85), "0.85");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("https://a.com/?x=1&y=<2>"), "https://a.com/?x=1&amp;y=&lt;2&gt;");
        assert_eq!(escape_xml("\"it's\""), "&quot;it&apos;s&quot;");
    }
}
