//! Error types for catalog loading, configuration and navigation.
//!
//! Searching itself never fails: empty inputs and misses are empty results.

use std::path::PathBuf;

/// Result type alias for palette operations.
pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

/// Errors that can occur around the search core.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Failed to read a catalog or config file.
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or has the wrong shape.
    #[error("Invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A record has an empty or blank name.
    #[error("Record at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two records share the same name.
    #[error("Duplicate icon name: {0}")]
    DuplicateName(String),

    /// The configuration file is not valid TOML.
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The navigation collaborator refused the route.
    #[error("Navigation to '{route}' failed: {reason}")]
    Navigation { route: String, reason: String },
}

impl PaletteError {
    /// Creates a new `ReadFile` error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a new `InvalidConfig` error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a new `Navigation` error.
    pub fn navigation(route: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Navigation {
            route: route.into(),
            reason: reason.into(),
        }
    }
}
