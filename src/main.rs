use clap::Parser;
use soap_catalog::config::{Command, LogFormat};
use soap_catalog::core::engine::{PRODUCTS_FILENAME, SITEMAP_FILENAME};
use soap_catalog::utils::error::ErrorSeverity;
use soap_catalog::utils::{logger, validation::Validate};
use soap_catalog::{static_matcher, CatalogEngine, CatalogError, CliConfig, LocalStorage};

const NOT_FOUND_EXIT_CODE: i32 = 4;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Text => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting soap-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        // 查無商品屬正常流程，不記為錯誤
        if e.is_not_found() {
            tracing::warn!("🔍 {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(NOT_FOUND_EXIT_CODE);
        }

        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ soap-catalog failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => NOT_FOUND_EXIT_CODE,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), CatalogError> {
    let site_config = config.load_site_config()?;

    // 驗證配置
    site_config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let storage = LocalStorage::new(site_config.output_path().to_string());
    let engine = CatalogEngine::new(static_matcher(), site_config, storage);

    match &config.command {
        Command::Resolve {
            ingredient,
            benefit,
            metadata,
            json_ld,
        } => {
            let output = engine.resolve(ingredient, benefit, *metadata, *json_ld)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Paths { json } => {
            println!("{}", engine.paths(*json)?);
        }
        Command::Sitemap { write } => {
            let xml = engine.sitemap(chrono::Utc::now());
            if *write {
                let location = engine.write_artifact(SITEMAP_FILENAME, &xml)?;
                println!("📁 Output saved to: {}", location);
            } else {
                print!("{}", xml);
            }
        }
        Command::Export { write } => {
            let csv_output = engine.export_csv()?;
            if *write {
                let location = engine.write_artifact(PRODUCTS_FILENAME, &csv_output)?;
                println!("📁 Output saved to: {}", location);
            } else {
                print!("{}", csv_output);
            }
        }
    }

    Ok(())
}
