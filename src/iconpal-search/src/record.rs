//! Icon records and scored search results.

use serde::{Deserialize, Serialize};

/// A searchable icon.
///
/// Catalog entries may carry fields this crate does not know about (SVG
/// paths, colors, license info); those are kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique icon name, also used as the route key.
    pub name: String,

    /// Alternative names, in catalog order.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Categories the icon belongs to, in catalog order.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Unknown catalog fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Creates a record with no aliases or categories.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            categories: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the aliases.
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the categories.
    pub fn with_categories(
        mut self,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Which field of a record produced its winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    /// The record name.
    #[default]
    Name,

    /// One of the aliases.
    Alias,

    /// One of the categories.
    Category,
}

impl MatchedField {
    /// Returns a human-readable label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alias => "alias",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for MatchedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A record paired with its score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord<'a> {
    /// The matched record.
    pub record: &'a Record,

    /// Weighted score, higher is better.
    pub score: f64,

    /// Field that produced `score`.
    pub matched_field: MatchedField,

    /// The exact name, alias or category text that won.
    pub matched_text: &'a str,
}

impl<'a> ScoredRecord<'a> {
    /// Creates a scored record.
    pub fn new(
        record: &'a Record,
        score: f64,
        matched_field: MatchedField,
        matched_text: &'a str,
    ) -> Self {
        Self {
            record,
            score,
            matched_field,
            matched_text,
        }
    }

    /// Wraps a record returned without scoring (empty query).
    pub fn unscored(record: &'a Record) -> Self {
        Self::new(record, 0.0, MatchedField::Name, &record.name)
    }
}
