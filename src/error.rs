//! Error types for tailwind-sorter

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for tailwind-sorter operations
pub type Result<T> = std::result::Result<T, SorterError>;

/// Top-level error type
#[derive(Error, Debug)]
pub enum SorterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Language {0} is not supported")]
    UnsupportedLanguage(String),

    #[error("{0}")]
    Message(String),
}

/// Reasons a category configuration is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no categories defined")]
    EmptyCategories,

    #[error("pseudo-class order is empty")]
    EmptyPseudoOrder,

    #[error("category order lists {order} entries but {categories} categories are defined")]
    OrderLengthMismatch { categories: usize, order: usize },

    #[error("no category named {0:?}")]
    UnknownCategory(String),
}
