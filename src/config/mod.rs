#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::SiteConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "soap-catalog")]
#[command(about = "Ingredient x benefit soap catalog and static site artifacts")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the output directory from config
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Resolve an ingredient/benefit slug pair into a product
    Resolve {
        ingredient: String,
        benefit: String,

        /// Include page metadata (title, description, Open Graph)
        #[arg(long)]
        metadata: bool,

        /// Include schema.org Product structured data
        #[arg(long)]
        json_ld: bool,
    },

    /// List every ingredient/benefit route
    Paths {
        /// Print as a JSON array instead of one route per line
        #[arg(long)]
        json: bool,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Write to the output directory instead of stdout
        #[arg(long)]
        write: bool,
    },

    /// Export every product as CSV
    Export {
        /// Write to the output directory instead of stdout
        #[arg(long)]
        write: bool,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Config file (or defaults) with CLI overrides applied.
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        let mut site_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        // 套用命令列覆蓋設定
        if let Some(output_path) = &self.output_path {
            site_config.output.path = output_path.clone();
            tracing::info!("🔧 Output path overridden to: {}", output_path);
        }

        Ok(site_config)
    }
}
