//! Configuration types for icon search.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PaletteError, PaletteResult};

/// Configuration for ranking and navigation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of records shown, unscored, for an empty query.
    pub empty_query_limit: usize,

    /// Maximum number of ranked results.
    pub result_limit: usize,

    /// Records must score strictly above this to be returned.
    pub min_score: f64,

    /// Multiplier applied to the name similarity.
    pub name_weight: f64,

    /// Multiplier applied to the best alias similarity.
    pub alias_weight: f64,

    /// Multiplier applied to the best category similarity.
    pub category_weight: f64,

    /// Route prefix for icon detail pages.
    pub route_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query_limit: 8,
            result_limit: 20,
            min_score: 0.3,
            name_weight: 2.0,
            alias_weight: 1.8,
            category_weight: 1.0,
            route_prefix: "/icons".to_string(),
        }
    }
}

impl SearchConfig {
    /// Creates a builder for constructing a configuration.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> PaletteResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PaletteError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded search config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> PaletteResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that limits are non-zero and weights are usable.
    pub fn validate(&self) -> PaletteResult<()> {
        if self.empty_query_limit == 0 {
            return Err(PaletteError::invalid_config(
                "empty_query_limit",
                "must be greater than zero",
            ));
        }
        if self.result_limit == 0 {
            return Err(PaletteError::invalid_config(
                "result_limit",
                "must be greater than zero",
            ));
        }

        for (field, weight) in [
            ("name_weight", self.name_weight),
            ("alias_weight", self.alias_weight),
            ("category_weight", self.category_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PaletteError::invalid_config(
                    field,
                    format!("must be a non-negative number, got {}", weight),
                ));
            }
        }

        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(PaletteError::invalid_config(
                "min_score",
                format!("must be a non-negative number, got {}", self.min_score),
            ));
        }

        if !self.route_prefix.starts_with('/') {
            return Err(PaletteError::invalid_config(
                "route_prefix",
                "must start with '/'",
            ));
        }

        Ok(())
    }
}

/// Builder for creating `SearchConfig` instances.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of records shown for an empty query.
    pub fn empty_query_limit(mut self, limit: usize) -> Self {
        self.config.empty_query_limit = limit;
        self
    }

    /// Sets the maximum number of ranked results.
    pub fn result_limit(mut self, limit: usize) -> Self {
        self.config.result_limit = limit;
        self
    }

    /// Sets the minimum score threshold.
    pub fn min_score(mut self, score: f64) -> Self {
        self.config.min_score = score;
        self
    }

    /// Sets the name, alias and category weights.
    pub fn weights(mut self, name: f64, alias: f64, category: f64) -> Self {
        self.config.name_weight = name;
        self.config.alias_weight = alias;
        self.config.category_weight = category;
        self
    }

    /// Sets the route prefix for icon pages.
    pub fn route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.route_prefix = prefix.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
