use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{}", unresolved_message(.ingredient, .benefit))]
    UnresolvedSlugPair {
        /// 找不到的成分 slug（找得到時為 None）
        ingredient: Option<String>,
        /// 找不到的功效 slug（找得到時為 None）
        benefit: Option<String>,
    },

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn unresolved_message(ingredient: &Option<String>, benefit: &Option<String>) -> String {
    match (ingredient, benefit) {
        (Some(ingredient), Some(benefit)) => format!(
            "Unknown ingredient slug '{}' and benefit slug '{}'",
            ingredient, benefit
        ),
        (Some(ingredient), None) => format!("Unknown ingredient slug '{}'", ingredient),
        (None, Some(benefit)) => format!("Unknown benefit slug '{}'", benefit),
        (None, None) => "Unresolved slug pair".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Catalog,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::UnresolvedSlugPair { .. } => ErrorCategory::Lookup,
            CatalogError::DuplicateSlug { .. } => ErrorCategory::Catalog,
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                ErrorCategory::Serialization
            }
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無商品是正常流程，由呼叫端顯示 "not found"
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::UnresolvedSlugPair { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::UnresolvedSlugPair { .. } => "Product Not Found".to_string(),
            CatalogError::DuplicateSlug { kind, slug } => {
                format!("The {} catalog lists '{}' more than once", kind, slug)
            }
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::SerializationError(e) => format!("Could not encode output: {}", e),
            CatalogError::CsvError(e) => format!("Could not produce CSV output: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::UnresolvedSlugPair { .. } => {
                "Run `soap-catalog paths` to list every valid ingredient/benefit pair".to_string()
            }
            CatalogError::DuplicateSlug { .. } => {
                "Give every catalog entry a unique slug".to_string()
            }
            CatalogError::IoError(_) => {
                "Check that the file exists and the output directory is writable".to_string()
            }
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                "Re-run with --verbose and report the failing record".to_string()
            }
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the value in the TOML config file or the matching CLI flag".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
